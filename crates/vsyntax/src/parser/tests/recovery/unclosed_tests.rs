use crate::parser::tests::expect_invalid;
use indoc::indoc;

#[test]
fn unclosed_block() {
    let input = indoc! {"
        fn main() {
        	x := 1
    "};
    insta::assert_snapshot!(expect_invalid(input), @r#"
    (source_file
      (function_declaration
        (identifier)
        (type_only_parameter_list)
        (block
          (short_var_declaration
            (expression_list
              (identifier))
            (expression_list
              (int_literal)))
          (MISSING "}"))))
    error at 10..20: missing closing `}` (related: `{` opened here at 10..11)
    "#);
}

#[test]
fn unclosed_call() {
    insta::assert_snapshot!(expect_invalid("foo(1, 2\n"), @r#"
    (source_file
      (call_expression
        (identifier)
        (argument_list
          (int_literal)
          (int_literal)
          (MISSING ")"))))
    error at 3..9: missing closing `)` (related: `(` opened here at 3..4)
    "#);
}

#[test]
fn unclosed_string() {
    insta::assert_snapshot!(expect_invalid("s := 'abc\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (interpreted_string_literal
            (MISSING string_close)))))
    error at 5..10: unterminated string literal
    ");
}

#[test]
fn unterminated_block_comment() {
    insta::assert_snapshot!(expect_invalid("x := 1 /* oops\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (ERROR))
    error at 7..15: unterminated block comment
    ");
}
