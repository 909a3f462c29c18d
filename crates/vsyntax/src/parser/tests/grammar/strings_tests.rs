use crate::parser::tests::expect_valid;

#[test]
fn interpolation_with_nested_braces() {
    insta::assert_snapshot!(expect_valid("s := 'val: ${ {a: (1+2)}.a }'\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (interpreted_string_literal
            (string_interpolation
              (selector_expression
                (map
                  (keyed_element
                    (identifier)
                    (parenthesized_expression
                      (binary_expression
                        (int_literal)
                        (int_literal)))))
                (field_identifier)))))))
    ");
}

#[test]
fn format_specifier_and_short_interpolation() {
    insta::assert_snapshot!(expect_valid(r"println('${x:5.2f} $name.len \n done')
"), @r"
    (source_file
      (call_expression
        (identifier)
        (argument_list
          (interpreted_string_literal
            (string_interpolation
              (identifier)
              (format_specifier))
            (string_interpolation
              (selector_expression
                (identifier)
                (field_identifier)))
            (escape_sequence)))))
    ");
}

#[test]
fn short_interpolation_call() {
    insta::assert_snapshot!(expect_valid("s := '$a.b(1)!'\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (interpreted_string_literal
            (string_interpolation
              (call_expression
                (selector_expression
                  (identifier)
                  (field_identifier))
                (argument_list
                  (int_literal))))))))
    ");
}

#[test]
fn string_flavors() {
    insta::assert_snapshot!(expect_valid("a := [r'\\n$x', c'hi\\n', `a`, \"dq\"]\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (array
            (raw_string_literal)
            (c_string_literal
              (escape_sequence))
            (rune_literal)
            (interpreted_string_literal)))))
    ");
}

#[test]
fn interpolation_spans_lines() {
    insta::assert_snapshot!(expect_valid("s := '${a +\nb}'\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (interpreted_string_literal
            (string_interpolation
              (binary_expression
                (identifier)
                (identifier)))))))
    ");
}
