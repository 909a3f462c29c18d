use crate::parser::cst::{SyntaxKind, SyntaxKind::*, TokenSet, VLang};
use rowan::Language;
use vsyntax_core::utils::to_snake_case;

#[test]
fn token_set_contains() {
    let set = TokenSet::new(&[ParenOpen, ParenClose, Star]);
    assert!(set.contains(ParenOpen));
    assert!(set.contains(ParenClose));
    assert!(set.contains(Star));
    assert!(!set.contains(Plus));
    assert!(!set.contains(Colon));
}

#[test]
fn token_set_union() {
    let a = TokenSet::new(&[ParenOpen, ParenClose]);
    let b = TokenSet::new(&[Star, Plus]);
    let c = a.union(b);
    assert!(c.contains(ParenOpen));
    assert!(c.contains(Star));
    assert!(c.contains(Plus));
    assert!(!c.contains(Colon));
}

#[test]
fn token_set_single() {
    let set = TokenSet::single(Colon);
    assert!(set.contains(Colon));
    assert!(!set.contains(ParenOpen));
}

#[test]
fn token_set_never_contains_nodes() {
    let set = TokenSet::new(&[Ident]);
    assert!(!set.contains(SourceFile));
    assert!(!set.contains(Identifier));
}

#[test]
fn token_set_debug() {
    let set = TokenSet::new(&[ParenOpen, Star, Plus]);
    let debug_str = format!("{:?}", set);
    assert!(debug_str.contains("ParenOpen"));
    assert!(debug_str.contains("Star"));
    assert!(debug_str.contains("Plus"));
    assert_eq!(format!("{:?}", TokenSet::EMPTY), "{}");
}

#[test]
fn tokens_fit_token_set() {
    assert!(
        (Error as u16) <= 128,
        "token kinds end at {}, exceeds TokenSet capacity of 128",
        Error as u16
    );
}

#[test]
fn trivia() {
    assert!(Whitespace.is_trivia());
    assert!(Newline.is_trivia());
    assert!(LineComment.is_trivia());
    assert!(BlockComment.is_trivia());
    assert!(!LineTerminator.is_trivia());
    assert!(!UnterminatedComment.is_trivia());
    assert!(!Error.is_trivia());
}

#[test]
fn errors() {
    assert!(Error.is_error());
    assert!(Garbage.is_error());
    assert!(InvalidNumber.is_error());
    assert!(InvalidEscape.is_error());
    assert!(UnterminatedComment.is_error());
    assert!(!Missing.is_error());
    assert!(!Ident.is_error());
}

#[test]
fn keywords() {
    assert!(KwFn.is_keyword());
    assert!(KwAs.is_keyword());
    assert!(!Ident.is_keyword());
    assert!(!SourceFile.is_keyword());
}

#[test]
fn named_kinds() {
    assert!(SourceFile.is_named());
    assert!(LineComment.is_named());
    assert!(!Ident.is_named());
    assert!(!Whitespace.is_named());
}

#[test]
fn node_names_are_snake_case() {
    for kind in SyntaxKind::node_kinds() {
        let expected = match kind {
            Error => "ERROR".to_owned(),
            Missing => "MISSING".to_owned(),
            NoneLiteral => "none".to_owned(),
            TrueLiteral => "true".to_owned(),
            FalseLiteral => "false".to_owned(),
            _ => to_snake_case(&format!("{kind:?}")),
        };
        assert_eq!(kind.name(), expected, "{kind:?}");
    }
}

#[test]
fn token_names() {
    assert_eq!(Ident.name(), "identifier");
    assert_eq!(LineTerminator.name(), "terminator");
    assert_eq!(LineComment.name(), "comment");
    assert_eq!(BlockComment.name(), "comment");
    assert_eq!(InterpolationOpen.name(), "${");
    assert_eq!(ParenClose.name(), ")");
}

#[test]
fn vlang_roundtrip() {
    for kind in [ParenOpen, Ident, Error, SourceFile, CPkgconfig] {
        let raw = VLang::kind_to_raw(kind);
        assert_eq!(VLang::kind_from_raw(raw), kind);
    }
}

#[test]
#[should_panic]
fn vlang_rejects_out_of_range() {
    VLang::kind_from_raw(rowan::SyntaxKind(__LAST as u16));
}
