mod grammar;
mod recovery;

use crate::parser::parse;

/// S-expression of a source that must parse without any diagnostic.
fn expect_valid(source: &str) -> String {
    let (parse, diagnostics) = parse(source).expect("fuel exhausted");
    let reported: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    assert!(reported.is_empty(), "unexpected diagnostics: {reported:#?}");
    assert!(!parse.had_errors(), "tree has errors:\n{}", parse.sexp());
    assert_eq!(parse.syntax().text().to_string(), source, "tree is not lossless");
    parse.sexp()
}

/// S-expression followed by every diagnostic, one per line.
fn expect_invalid(source: &str) -> String {
    let (parse, diagnostics) = parse(source).expect("fuel exhausted");
    assert!(!diagnostics.is_empty(), "expected diagnostics:\n{}", parse.sexp());
    assert_eq!(parse.syntax().text().to_string(), source, "tree is not lossless");
    let mut out = parse.sexp();
    for diagnostic in diagnostics.iter() {
        out.push('\n');
        out.push_str(&diagnostic.to_string());
    }
    out
}
