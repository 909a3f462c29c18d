mod declarations_tests;
mod expressions_tests;
mod statements_tests;
mod strings_tests;
mod terminators_tests;
