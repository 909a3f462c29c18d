mod fuel_tests;
mod incomplete_tests;
mod unclosed_tests;
mod unexpected_tests;
