use crate::parser::tests::expect_invalid;
use indoc::indoc;

#[test]
fn stray_closing_bracket() {
    let input = indoc! {"
        x := 1
        ]
        y := 2
    "};
    insta::assert_snapshot!(expect_invalid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (ERROR)
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    error at 7..8: unexpected token: expected a statement
    ");
}

#[test]
fn stray_token_in_struct_body() {
    let input = indoc! {"
        struct Foo {
        	x int )
        	y string
        }
    "};
    insta::assert_snapshot!(expect_invalid(input), @r"
    (source_file
      (struct_declaration
        (type_identifier)
        (struct_field_declaration_list
          (struct_field_declaration
            (field_identifier)
            (builtin_type))
          (ERROR)
          (struct_field_declaration
            (field_identifier)
            (builtin_type)))))
    error at 20..21: unexpected token: expected newline after member
    ");
}

#[test]
fn composite_literal_in_condition() {
    insta::assert_snapshot!(expect_invalid("if p == Point{} {\n}\n"), @r"
    (source_file
      (if_expression
        (binary_expression
          (identifier)
          (ERROR
            (type_initializer
              (type_identifier)
              (literal_value))))
        (block)))
    error at 13..14: composite literal is not allowed here (hint: wrap the literal in `(...)`)
    ");
}

#[test]
fn composite_literal_in_condition_marks_tree() {
    let (parse, diagnostics) = crate::parse("if x == Foo{} {\n}\n").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert!(parse.had_errors());
    assert_eq!(parse.errors().len(), 1);
}

#[test]
fn parenthesized_literal_in_condition() {
    let (parse, diagnostics) = crate::parse("if x == (Foo{}) {\n}\n").unwrap();
    assert!(diagnostics.is_empty());
    assert!(!parse.had_errors());
}

#[test]
fn misplaced_mut() {
    insta::assert_snapshot!(expect_invalid("x := mut 1\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (mutable_expression
            (int_literal)))))
    error at 5..8: `mut` is not allowed here (hint: `mut` marks declarations, receivers, parameters and arguments)
    ");
}

#[test]
fn unknown_directive() {
    insta::assert_snapshot!(expect_invalid("#foo bar\nx := 1\n"), @r"
    (source_file
      (ERROR)
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    error at 0..4: unknown directive `#foo`
    ");
}

#[test]
fn invalid_number() {
    insta::assert_snapshot!(expect_invalid("x := 0b102\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (ERROR))))
    error at 5..10: invalid number literal
    ");
}

#[test]
fn invalid_escape() {
    insta::assert_snapshot!(expect_invalid("s := 'a\\qb'\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (interpreted_string_literal
            (ERROR)))))
    error at 7..9: invalid escape sequence
    ");
}
