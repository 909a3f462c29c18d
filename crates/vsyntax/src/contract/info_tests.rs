use vsyntax_core::grammar::GrammarInfo;

use super::{SUPERTYPES, grammar_info};

#[test]
fn precedence_levels() {
    let info = grammar_info();
    let table: Vec<String> = info
        .precedences
        .iter()
        .map(|p| format!("{} {} {:?}: {}", p.name, p.value, p.assoc, p.operators.join(" ")))
        .collect();

    insta::assert_snapshot!(table.join("\n"), @r"
    unary 7 Right: ! ~ + - * & ^ <-
    as 6 Left: as
    multiplicative 5 Left: * / % << >> >>> & &^
    additive 4 Left: + - | ^
    comparative 3 Left: == != < <= > >= !in !is in is
    and 2 Left: &&
    or 1 Left: ||
    ");
}

#[test]
fn operator_lookup() {
    let info = grammar_info();
    assert_eq!(info.level_of("&&").map(|p| p.name.as_str()), Some("and"));
    assert_eq!(info.level_of("!in").map(|p| p.name.as_str()), Some("comparative"));
    assert_eq!(info.level_of(">>>").map(|p| p.value), Some(5));
    // Prefix levels are listed first, so the unary reading wins.
    assert_eq!(info.level_of("-").map(|p| p.name.as_str()), Some("unary"));
    assert!(info.level_of("=").is_none());
}

#[test]
fn json_round_trip_keeps_order() {
    let info = grammar_info();
    let json = info.to_json().unwrap();
    let back = GrammarInfo::from_json(&json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn grammar_header() {
    let info = grammar_info();
    assert_eq!(info.name, "v");
    assert_eq!(info.word.as_deref(), Some("identifier"));
    assert_eq!(info.extras, vec!["comment", "whitespace"]);
    assert_eq!(info.supertypes, SUPERTYPES);
    assert!(info.externals.iter().any(|e| e == "terminator"));
    assert!(info.externals.iter().any(|e| e == "string_content"));
    assert!(info.is_conflict("block", "type_initializer"));
    assert!(!info.is_conflict("block", "if_expression"));
}
