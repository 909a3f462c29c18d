use crate::Error;
use crate::parser::lexer::lex;
use crate::parser::{Parser, parse, parse_with_parser};

#[test]
fn deep_nesting_hits_recursion_limit() {
    let source = "(".repeat(1000);
    let result = parse(&source);
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn custom_recursion_limit() {
    let source = "x := ((((1))))\n";
    let parser = Parser::new(source, lex(source)).with_recursion_fuel(Some(3));
    let result = parse_with_parser(parser);
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn exec_fuel_exhausted() {
    let source = "x := 1 + 2\n";
    let parser = Parser::new(source, lex(source)).with_exec_fuel(Some(3));
    let result = parse_with_parser(parser);
    assert!(matches!(result, Err(Error::ExecFuelExhausted)));
}

#[test]
fn enough_exec_fuel() {
    let source = "x := 1 + 2\n";
    let parser = Parser::new(source, lex(source)).with_exec_fuel(Some(100));
    let (parse, diagnostics) = parse_with_parser(parser).expect("fuel is sufficient");
    assert!(diagnostics.is_empty());
    assert_eq!(parse.syntax().text().to_string(), source);
}
