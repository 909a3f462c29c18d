use super::*;

const MINIMAL: &str = r#"{
    "name": "v",
    "word": "identifier",
    "precedences": [
        { "name": "unary", "value": 6, "assoc": "none", "operators": ["!", "-"] },
        { "name": "additive", "value": 4, "assoc": "left", "operators": ["+", "-"] }
    ],
    "conflicts": [["qualified_type", "_expression"]]
}"#;

#[test]
fn parse_minimal_grammar() {
    let info = GrammarInfo::from_json(MINIMAL).unwrap();
    assert_eq!(info.name, "v");
    assert_eq!(info.word.as_deref(), Some("identifier"));
    assert!(info.extras.is_empty());
    assert_eq!(info.precedences.len(), 2);
    assert_eq!(info.precedence("additive").unwrap().assoc, Assoc::Left);
}

#[test]
fn operator_lookup_prefers_first_level() {
    let info = GrammarInfo::from_json(MINIMAL).unwrap();
    // `-` is both unary and additive; strongest level wins.
    assert_eq!(info.level_of("-").unwrap().name, "unary");
    assert_eq!(info.level_of("+").unwrap().name, "additive");
    assert!(info.level_of("&&").is_none());
}

#[test]
fn conflicts_are_symmetric() {
    let info = GrammarInfo::from_json(MINIMAL).unwrap();
    assert!(info.is_conflict("qualified_type", "_expression"));
    assert!(info.is_conflict("_expression", "qualified_type"));
    assert!(!info.is_conflict("qualified_type", "identifier"));
}

#[test]
fn rejects_unordered_levels() {
    let json = r#"{
        "name": "v",
        "precedences": [
            { "name": "or", "value": 1, "assoc": "left" },
            { "name": "and", "value": 2, "assoc": "left" }
        ]
    }"#;
    let err = GrammarInfo::from_json(json).unwrap_err();
    insta::assert_snapshot!(err, @"precedence `or` is weaker than `and` listed after it");
}

#[test]
fn rejects_malformed_json() {
    let err = GrammarInfo::from_json("{").unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
}

#[test]
fn assoc_serializes_lowercase() {
    let level = PrecedenceLevel {
        name: "or".into(),
        value: 1,
        assoc: Assoc::Left,
        operators: vec!["||".into()],
    };
    let json = serde_json::to_string(&level).unwrap();
    insta::assert_snapshot!(json, @r#"{"name":"or","value":1,"assoc":"left","operators":["||"]}"#);
}
