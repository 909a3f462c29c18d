use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn leading_dot_continues_method_chain() {
    insta::assert_snapshot!(expect_valid("x := foo()\n\t.bar()\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (call_expression
            (selector_expression
              (call_expression
                (identifier)
                (argument_list))
              (field_identifier))
            (argument_list)))))
    ");
}

#[test]
fn trailing_operator_continues_expression() {
    insta::assert_snapshot!(expect_valid("x := 1 +\n\t2\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (binary_expression
            (int_literal)
            (int_literal)))))
    ");
}

#[test]
fn line_breaks_inside_parens_are_trivia() {
    insta::assert_snapshot!(expect_valid("foo(1,\n2)\n"), @r"
    (source_file
      (call_expression
        (identifier)
        (argument_list
          (int_literal)
          (int_literal))))
    ");
}

#[test]
fn line_breaks_inside_brackets_are_trivia() {
    let input = indoc! {"
        a := [
        	1,
        	2
        ]
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (array
            (int_literal)
            (int_literal)))))
    ");
}

#[test]
fn multiline_block_comment_ends_statement() {
    insta::assert_snapshot!(expect_valid("x := 1 /* a\nb */ y := 2\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (comment)
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    ");
}

#[test]
fn blank_lines_and_semicolons() {
    insta::assert_snapshot!(expect_valid("\n\na := 1;;\n\nb := 2\n\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    ");
}
