use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn statements_on_separate_lines() {
    insta::assert_snapshot!(expect_valid("x := 1\ny := 2"), @r"
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

#[test]
fn semicolon_separates_statements() {
    insta::assert_snapshot!(expect_valid("a++; b--\n"), @r"
    (source_file
      (inc_statement
        (identifier))
      (dec_statement
        (identifier)))
    ");
}

#[test]
fn for_loop_forms() {
    let input = indoc! {"
        for {
        }
        for i < 10 {
        }
        for i := 0; i < 10; i++ {
        }
        for k, v in m {
        }
        for i in 0..10 {
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (for_statement
        (block))
      (for_statement
        (binary_expression
          (identifier)
          (int_literal))
        (block))
      (for_statement
        (cstyle_for_clause
          (short_var_declaration
            (expression_list
              (identifier))
            (expression_list
              (int_literal)))
          (binary_expression
            (identifier)
            (int_literal))
          (inc_statement
            (identifier)))
        (block))
      (for_statement
        (for_in_operator
          (identifier)
          (identifier)
          (identifier))
        (block))
      (for_statement
        (for_in_operator
          (identifier)
          (range
            (int_literal)
            (int_literal)))
        (block)))
    ");
}

#[test]
fn labels_and_jumps() {
    let input = indoc! {"
        outer: for {
        	break outer
        	continue
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (labeled_statement
        (label_name)
        (for_statement
          (block
            (break_statement
              (label_name))
            (continue_statement)))))
    ");
}

#[test]
fn function_body_statements() {
    let input = indoc! {"
        fn f() (int, string) {
        	defer {
        		cleanup()
        	}
        	assert x > 0, 'x must be positive'
        	a, b = b, a
        	n += 2
        	ch <- 1
        	return 1, 'a'
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (function_declaration
        (identifier)
        (type_only_parameter_list)
        (multi_return_type
          (builtin_type)
          (builtin_type))
        (block
          (defer_statement
            (block
              (call_expression
                (identifier)
                (argument_list))))
          (assert_statement
            (binary_expression
              (identifier)
              (int_literal))
            (interpreted_string_literal))
          (assignment_statement
            (expression_list
              (identifier)
              (identifier))
            (expression_list
              (identifier)
              (identifier)))
          (assignment_statement
            (expression_list
              (identifier))
            (expression_list
              (int_literal)))
          (send_statement
            (identifier)
            (int_literal))
          (return_statement
            (expression_list
              (int_literal)
              (interpreted_string_literal))))))
    ");
}

#[test]
fn bare_return() {
    let input = indoc! {"
        fn f() {
        	return
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (function_declaration
        (identifier)
        (type_only_parameter_list)
        (block
          (return_statement))))
    ");
}

#[test]
fn comptime_for() {
    let input = indoc! {"
        $for field in T.fields {
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (comptime_for_statement
        (for_in_operator
          (identifier)
          (type_selector_expression
            (type_placeholder)
            (field_identifier)))
        (block)))
    ");
}

#[test]
fn asm_block() {
    let input = indoc! {"
        asm amd64 {
        	mov eax, 1
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (asm_statement
        (identifier)))
    ");
}

#[test]
fn sql_block_on_selector() {
    let input = indoc! {"
        rows := sql app.db {
        	select from User
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (sql_expression
            (selector_expression
              (identifier)
              (field_identifier))))))
    ");
}

#[test]
fn comments_are_kept() {
    let input = indoc! {"
        // leading
        x := 1 // trailing
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (comment)
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (comment))
    ");
}
