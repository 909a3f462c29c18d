use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::scanner::{
    Frame, ScannerState, ShortSplicePhase, StringFlavor, StringFrame, scan_token,
};
use crate::parser::lexer::lex;
use indoc::indoc;

/// Significant token kinds, separated by spaces.
fn kinds(source: &str) -> String {
    lex(source)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| format!("{:?}", t.kind))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn terminator_after_operand_only() {
    insta::assert_snapshot!(kinds("x := 1 +\n2\ny\n"), @"Ident ColonEq Int Plus Int LineTerminator Ident LineTerminator");
}

#[test]
fn jump_keywords_end_statements() {
    insta::assert_snapshot!(kinds("return\nbreak\ncontinue\n"), @"KwReturn LineTerminator KwBreak LineTerminator KwContinue LineTerminator");
}

#[test]
fn no_terminator_inside_parens() {
    insta::assert_snapshot!(kinds("foo(1,\n2)\n"), @"Ident ParenOpen Int Comma Int ParenClose LineTerminator");
}

#[test]
fn no_terminator_inside_brackets() {
    insta::assert_snapshot!(kinds("a := [\n1\n2\n]\n"), @"Ident ColonEq BracketOpen Int Int BracketClose LineTerminator");
}

#[test]
fn terminators_inside_braces() {
    insta::assert_snapshot!(kinds("{\na\n}\n"), @"BraceOpen Ident LineTerminator BraceClose LineTerminator");
}

#[test]
fn const_group_keeps_terminators() {
    let input = indoc! {"
        const (
        	a = 1
        )
    "};
    insta::assert_snapshot!(kinds(input), @"KwConst ParenOpen Ident Eq Int LineTerminator ParenClose LineTerminator");
}

#[test]
fn one_terminator_per_line_break_run() {
    insta::assert_snapshot!(kinds("a\n\n\nb\n"), @"Ident LineTerminator Ident LineTerminator");
}

#[test]
fn leading_dot_continues_statement() {
    insta::assert_snapshot!(kinds("a\n\t.b()\n"), @"Ident Dot Ident ParenOpen ParenClose LineTerminator");
}

#[test]
fn else_on_next_line_continues_statement() {
    insta::assert_snapshot!(kinds("if a {\n}\nelse {\n}\n"), @"KwIf Ident BraceOpen BraceClose KwElse BraceOpen BraceClose LineTerminator");
}

#[test]
fn comment_keeps_last_token() {
    insta::assert_snapshot!(kinds("a // note\nb +// note\nc\n"), @"Ident LineTerminator Ident Plus Ident LineTerminator");
}

#[test]
fn multiline_block_comment_terminates() {
    let tokens = lex("a /* x\ny */ b\n");
    let significant: Vec<_> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
    assert_eq!(significant[1].kind, LineTerminator);
    assert!(significant[1].span.is_empty());
    assert_eq!(u32::from(significant[1].span.start()), 11);
    insta::assert_snapshot!(kinds("a /* x\ny */ b\n"), @"Ident LineTerminator Ident LineTerminator");
}

#[test]
fn stray_closer_leaves_frames() {
    insta::assert_snapshot!(kinds("foo(\n)\n)\nx\n"), @"Ident ParenOpen ParenClose LineTerminator ParenClose LineTerminator Ident LineTerminator");
}

#[test]
fn interpolation_counts_braces() {
    insta::assert_snapshot!(kinds("'${ {a: 1}.a }'"), @"StringOpen InterpolationOpen BraceOpen Ident Colon Int BraceClose Dot Ident InterpolationClose StringClose");
}

#[test]
fn no_terminator_inside_interpolation() {
    insta::assert_snapshot!(kinds("'${a +\nb}'\n"), @"StringOpen InterpolationOpen Ident Plus Ident InterpolationClose StringClose LineTerminator");
}

#[test]
fn format_specifier() {
    insta::assert_snapshot!(kinds("'${x:08.3f}'"), @"StringOpen InterpolationOpen Ident FormatSpec InterpolationClose StringClose");
}

#[test]
fn short_interpolation() {
    insta::assert_snapshot!(kinds("'$a.b(1) c'"), @"StringOpen Dollar Ident Dot Ident ParenOpen Int ParenClose StringContent StringClose");
}

#[test]
fn short_interpolation_stops_at_trailing_dot() {
    insta::assert_snapshot!(kinds("'$a. done'"), @"StringOpen Dollar Ident StringContent StringClose");
}

#[test]
fn escapes() {
    insta::assert_snapshot!(kinds(r"'a\n\x41é\q'"), @"StringOpen StringContent Escape Escape StringContent InvalidEscape StringClose");
}

#[test]
fn raw_string_is_opaque() {
    insta::assert_snapshot!(kinds(r"r'$a\n${b}'"), @"StringOpen StringContent StringClose");
}

#[test]
fn c_string_escapes_but_never_interpolates() {
    insta::assert_snapshot!(kinds(r"c'$a\n'"), @"StringOpen StringContent Escape StringClose");
}

#[test]
fn generic_closers_split() {
    insta::assert_snapshot!(kinds("Foo<Bar<int>>\n"), @"Ident Lt Ident Lt Ident Gt Gt LineTerminator");
}

#[test]
fn comparison_is_not_generic() {
    insta::assert_snapshot!(kinds("a<b>>c\n"), @"Ident Lt Ident Shr Ident LineTerminator");
}

#[test]
fn directives() {
    let input = indoc! {"
        #include <stdio.h>
        #flag -lm
        #define FOO 1
    "};
    insta::assert_snapshot!(kinds(input), @"Directive CIncludePath LineTerminator Directive DirectiveBody LineTerminator Directive Ident DirectiveBody LineTerminator");
}

#[test]
fn asm_block_is_opaque() {
    let input = indoc! {"
        asm amd64 {
        	mov eax, {1}
        }
    "};
    insta::assert_snapshot!(kinds(input), @"KwAsm Ident BraceOpen RawBlockContent BraceClose LineTerminator");
}

#[test]
fn sql_block_after_selector() {
    let input = indoc! {"
        rows := sql app.db {
        	select from User where id == 1
        }
    "};
    insta::assert_snapshot!(kinds(input), @"Ident ColonEq Ident Ident Dot Ident BraceOpen RawBlockContent BraceClose LineTerminator");
}

#[test]
fn sql_module_selector_stays_code() {
    insta::assert_snapshot!(kinds("if sql.ready {\n}\n"), @"KwIf Ident Dot Ident BraceOpen BraceClose LineTerminator");
}

#[test]
fn state_driven_by_hand() {
    let source = "'ab";
    let mut state = ScannerState::new();

    let open = scan_token(source, 0, &mut state).map(|t| t.kind);
    assert_eq!(open, Some(StringOpen));
    assert!(state.in_string());
    assert_eq!(
        state.frames(),
        &[Frame::Str(StringFrame {
            quote: b'\'',
            flavor: StringFlavor::Interpreted,
        })]
    );

    let content = scan_token(source, 1, &mut state);
    assert_eq!(content.map(|t| t.kind), Some(StringContent));
    assert_eq!(content.map(|t| u32::from(t.span.end())), Some(3));
    assert_eq!(scan_token(source, 3, &mut state), None);
}

#[test]
fn state_tracks_short_splice_phase() {
    let source = "'$a.";
    let mut state = ScannerState::new();
    let mut offset = 0;
    let mut seen: Vec<SyntaxKind> = Vec::new();
    while let Some(token) = scan_token(source, offset, &mut state) {
        seen.push(token.kind);
        offset = usize::from(token.span.end());
        if token.kind == Ident {
            assert_eq!(
                state.frames().last(),
                Some(&Frame::ShortSplice(ShortSplicePhase::AfterOperand))
            );
        }
    }
    assert_eq!(seen, [StringOpen, Dollar, Ident, StringContent]);
}

#[test]
fn terminator_allowed_follows_last_token() {
    let mut state = ScannerState::new();
    assert!(!state.terminator_allowed());
    scan_token("x", 0, &mut state);
    assert_eq!(state.last(), Some(Ident));
    assert!(state.terminator_allowed());

    let mut state = ScannerState::new();
    scan_token("(x", 0, &mut state);
    scan_token("(x", 1, &mut state);
    assert!(!state.terminator_allowed());
}
