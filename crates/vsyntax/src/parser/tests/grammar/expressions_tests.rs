use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(expect_valid("a + b * c\n"), @r"
    (source_file
      (binary_expression
        (identifier)
        (binary_expression
          (identifier)
          (identifier))))
    ");
}

#[test]
fn same_level_is_left_associative() {
    insta::assert_snapshot!(expect_valid("a - b - c\n"), @r"
    (source_file
      (binary_expression
        (binary_expression
          (identifier)
          (identifier))
        (identifier)))
    ");
}

#[test]
fn logical_and_comparison_levels() {
    insta::assert_snapshot!(expect_valid("a || b && c == d\n"), @r"
    (source_file
      (binary_expression
        (identifier)
        (binary_expression
          (identifier)
          (binary_expression
            (identifier)
            (identifier)))))
    ");
}

#[test]
fn unary_binds_tighter_than_binary() {
    insta::assert_snapshot!(expect_valid("x := -a * !b\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (binary_expression
            (unary_expression
              (identifier))
            (unary_expression
              (identifier))))))
    ");
}

#[test]
fn selectors_and_calls() {
    insta::assert_snapshot!(expect_valid("foo.bar(1, x: 2).baz\n"), @r"
    (source_file
      (selector_expression
        (call_expression
          (selector_expression
            (identifier)
            (field_identifier))
          (argument_list
            (int_literal)
            (keyed_element
              (field_identifier)
              (int_literal))))
        (field_identifier)))
    ");
}

#[test]
fn index_and_slices() {
    let input = indoc! {"
        a[1]
        b[1..]
        c[..2]
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (index_expression
        (identifier)
        (int_literal))
      (slice_expression
        (identifier)
        (int_literal))
      (slice_expression
        (identifier)
        (int_literal)))
    ");
}

#[test]
fn generic_call() {
    insta::assert_snapshot!(expect_valid("x := foo<int>(1)\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (call_expression
            (identifier)
            (type_parameters
              (builtin_type))
            (argument_list
              (int_literal))))))
    ");
}

#[test]
fn struct_initializer() {
    insta::assert_snapshot!(expect_valid("p := Point{x: 1, y: 2}\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (type_initializer
            (type_identifier)
            (literal_value
              (keyed_element
                (field_identifier)
                (int_literal))
              (keyed_element
                (field_identifier)
                (int_literal)))))))
    ");
}

#[test]
fn multiline_struct_initializer_is_one_statement() {
    let input = indoc! {"
        p := Point{
        	x: 1
        	y: 2
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (type_initializer
            (type_identifier)
            (literal_value
              (keyed_element
                (field_identifier)
                (int_literal))
              (keyed_element
                (field_identifier)
                (int_literal)))))))
    ");
}

#[test]
fn map_literal() {
    insta::assert_snapshot!(expect_valid("m := {'a': 1, 'b': 2}\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (map
            (keyed_element
              (interpreted_string_literal)
              (int_literal))
            (keyed_element
              (interpreted_string_literal)
              (int_literal))))))
    ");
}

#[test]
fn array_literals() {
    let input = indoc! {"
        a := [1, 2, 3]
        b := [1, 2]!
        c := []int{}
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (array
            (int_literal)
            (int_literal)
            (int_literal))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (fixed_array
            (int_literal)
            (int_literal))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (type_initializer
            (array_type
              (builtin_type))
            (literal_value)))))
    ");
}

#[test]
fn casts() {
    insta::assert_snapshot!(expect_valid("x := u8(y) as int\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (as_type_cast_expression
            (type_cast_expression
              (builtin_type)
              (identifier))
            (builtin_type)))))
    ");
}

#[test]
fn is_and_not_in() {
    insta::assert_snapshot!(expect_valid("ok := x is Foo && y !in list\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (binary_expression
            (is_expression
              (identifier)
              (type_identifier))
            (in_expression
              (identifier)
              (identifier))))))
    ");
}

#[test]
fn option_propagation() {
    let input = indoc! {"
        x := foo()?
        y := bar() or { 0 }
        z := baz()!
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (option_propagator
            (call_expression
              (identifier)
              (argument_list)))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (option_propagator
            (call_expression
              (identifier)
              (argument_list))
            (or_block
              (block
                (int_literal))))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (option_propagator
            (call_expression
              (identifier)
              (argument_list))))))
    ");
}

#[test]
fn enum_shorthand_and_type_selector() {
    let input = indoc! {"
        c := .red
        d := Color.green
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (type_selector_expression
            (field_identifier))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (type_selector_expression
            (type_identifier)
            (field_identifier)))))
    ");
}

#[test]
fn fn_literal_with_captures() {
    let input = indoc! {"
        f := fn [x] (a int) int {
        	return a + x
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (fn_literal
            (exposed_variables_list
              (identifier))
            (parameter_list
              (parameter_declaration
                (identifier)
                (builtin_type)))
            (builtin_type)
            (block
              (return_statement
                (expression_list
                  (binary_expression
                    (identifier)
                    (identifier)))))))))
    ");
}

#[test]
fn if_else_chain() {
    let input = indoc! {"
        if a > b {
        	x = 1
        } else if a < b {
        	x = 2
        }
        else {
        	x = 3
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (if_expression
        (binary_expression
          (identifier)
          (identifier))
        (block
          (assignment_statement
            (expression_list
              (identifier))
            (expression_list
              (int_literal))))
        (if_expression
          (binary_expression
            (identifier)
            (identifier))
          (block
            (assignment_statement
              (expression_list
                (identifier))
              (expression_list
                (int_literal))))
          (block
            (assignment_statement
              (expression_list
                (identifier))
              (expression_list
                (int_literal)))))))
    ");
}

#[test]
fn if_guard() {
    let input = indoc! {"
        if x := opt() {
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (if_expression
        (short_var_declaration
          (expression_list
            (identifier))
          (expression_list
            (call_expression
              (identifier)
              (argument_list))))
        (block)))
    ");
}

#[test]
fn match_arms() {
    let input = indoc! {"
        match x {
        	1, 2 { a() }
        	3...5 { b() }
        	else { c() }
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (match_expression
        (identifier)
        (expression_case
          (int_literal)
          (int_literal)
          (block
            (call_expression
              (identifier)
              (argument_list))))
        (expression_case
          (range
            (int_literal)
            (int_literal))
          (block
            (call_expression
              (identifier)
              (argument_list))))
        (default_case
          (block
            (call_expression
              (identifier)
              (argument_list))))))
    ");
}

#[test]
fn match_enum_shorthand_arms() {
    let input = indoc! {"
        match c {
        	.red { a() }
        	.green, .blue { b() }
        	else { c() }
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (match_expression
        (identifier)
        (expression_case
          (type_selector_expression
            (field_identifier))
          (block
            (call_expression
              (identifier)
              (argument_list))))
        (expression_case
          (type_selector_expression
            (field_identifier))
          (type_selector_expression
            (field_identifier))
          (block
            (call_expression
              (identifier)
              (argument_list))))
        (default_case
          (block
            (call_expression
              (identifier)
              (argument_list))))))
    ");
}

#[test]
fn match_type_list() {
    let input = indoc! {"
        match x {
        	Ident | ast.Lit { a() }
        	else {}
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (match_expression
        (identifier)
        (expression_case
          (type_list
            (type_identifier)
            (qualified_type
              (module_identifier)
              (type_identifier)))
          (block
            (call_expression
              (identifier)
              (argument_list))))
        (default_case
          (block))))
    ");
}

#[test]
fn match_bitwise_or_value() {
    insta::assert_snapshot!(expect_valid("match x {\n\ta | b { c() }\n}\n"), @r"
    (source_file
      (match_expression
        (identifier)
        (expression_case
          (binary_expression
            (identifier)
            (identifier))
          (block
            (call_expression
              (identifier)
              (argument_list))))))
    ");
}

#[test]
fn mut_static_declaration() {
    insta::assert_snapshot!(expect_valid("mut static x := 0\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (mutable_expression
            (identifier)))
        (expression_list
          (int_literal))))
    ");
}

#[test]
fn mut_in_declaration() {
    insta::assert_snapshot!(expect_valid("mut x := 1\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (mutable_expression
            (identifier)))
        (expression_list
          (int_literal))))
    ");
}

#[test]
fn comptime_if() {
    let input = indoc! {"
        $if linux {
        } $else {
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (comptime_if_expression
        (identifier)
        (block)
        (block)))
    ");
}
