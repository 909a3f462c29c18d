use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::{is_builtin_type, lex, token_text};
use indoc::indoc;

/// Tokens without horizontal whitespace, one per line.
fn tokens(source: &str) -> String {
    lex(source)
        .iter()
        .filter(|t| t.kind != SyntaxKind::Whitespace)
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn keywords_and_identifiers() {
    insta::assert_snapshot!(tokens("fn foo mut_x __global @type @FILE @["), @r#"
    KwFn "fn"
    Ident "foo"
    Ident "mut_x"
    KwGlobal "__global"
    Ident "@type"
    PseudoComptimeIdent "@FILE"
    AttrOpen "@["
    "#);
}

#[test]
fn operators_take_longest_match() {
    insta::assert_snapshot!(tokens(">>>= >>= >> &^= &^ <- := ..."), @r#"
    UShrEq ">>>="
    ShrEq ">>="
    Shr ">>"
    AmpCaretEq "&^="
    AmpCaret "&^"
    Arrow "<-"
    ColonEq ":="
    Ellipsis "..."
    "#);
}

#[test]
fn negated_membership() {
    insta::assert_snapshot!(tokens("!in !is !x !inside"), @r#"
    NotIn "!in"
    NotIs "!is"
    Bang "!"
    Ident "x"
    Bang "!"
    Ident "inside"
    "#);
}

#[test]
fn numbers() {
    insta::assert_snapshot!(tokens(".5 0x1F 0b1010 0o17 1_000 0755 3.14 1e10 0x1p-3"), @r#"
    Float ".5"
    Int "0x1F"
    Int "0b1010"
    Int "0o17"
    Int "1_000"
    Int "0755"
    Float "3.14"
    Float "1e10"
    Float "0x1p-3"
    "#);
}

#[test]
fn invalid_numbers() {
    insta::assert_snapshot!(tokens("0b12 0o8 1_ 0x 12abc 089"), @r#"
    InvalidNumber "0b12"
    InvalidNumber "0o8"
    InvalidNumber "1_"
    InvalidNumber "0x"
    InvalidNumber "12abc"
    InvalidNumber "089"
    "#);
}

#[test]
fn range_after_integer() {
    insta::assert_snapshot!(tokens("0..10"), @r#"
    Int "0"
    DotDot ".."
    Int "10"
    "#);
}

#[test]
fn runes() {
    insta::assert_snapshot!(tokens(r"`a` `\n` `\q`"), @r#"
    Rune "`a`"
    Rune "`\\n`"
    InvalidEscape "`\\q`"
    "#);
}

#[test]
fn comments() {
    let input = indoc! {"
        // line
        /* block */
    "};
    insta::assert_snapshot!(tokens(input), @r#"
    LineComment "// line"
    Newline "\n"
    BlockComment "/* block */"
    Newline "\n"
    "#);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    insta::assert_snapshot!(tokens("x /* oops\ny"), @r#"
    Ident "x"
    UnterminatedComment "/* oops\ny"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(tokens(r"a \\ b"), @r#"
    Ident "a"
    Garbage "\\\\"
    Ident "b"
    "#);
}

#[test]
fn shebang_is_a_comment() {
    insta::assert_snapshot!(tokens("#!/usr/bin/env v\nx"), @r##"
    LineComment "#!/usr/bin/env v"
    Newline "\n"
    Ident "x"
    "##);
}

#[test]
fn crlf_line_break() {
    insta::assert_snapshot!(tokens("a\r\nb"), @r#"
    Ident "a"
    LineTerminator "\r\n"
    Ident "b"
    "#);
}

#[test]
fn tokens_cover_source() {
    let source = "fn main() {\n\tprintln('hi ${name}!') // greet\n}\n";
    let tokens = lex(source);
    let rebuilt: String = tokens.iter().map(|t| token_text(source, t)).collect();
    assert_eq!(rebuilt, source);
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].span.end(), pair[1].span.start());
    }
}

#[test]
fn builtin_types() {
    assert!(is_builtin_type("int"));
    assert!(is_builtin_type("voidptr"));
    assert!(is_builtin_type("IError"));
    assert!(!is_builtin_type("Int"));
    assert!(!is_builtin_type("foo"));
}
