use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn module_and_imports() {
    let input = indoc! {"
        module main

        import os
        import net.http as h
        import math { sqrt, Vec }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (module_clause
        (identifier))
      (import_declaration
        (import_path))
      (import_declaration
        (import_path)
        (import_alias
          (module_identifier)))
      (import_declaration
        (import_path)
        (import_symbols
          (import_symbols_list
            (identifier)
            (type_identifier)))))
    ");
}

#[test]
fn constants_and_globals() {
    let input = indoc! {"
        const (
        	a = 1
        	b = 'x'
        )

        const c = 3.14

        __global counter int
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (const_declaration
        (const_spec
          (identifier)
          (int_literal))
        (const_spec
          (identifier)
          (interpreted_string_literal)))
      (const_declaration
        (const_spec
          (identifier)
          (float_literal)))
      (global_var_declaration
        (global_var_type_initializer
          (identifier)
          (builtin_type))))
    ");
}

#[test]
fn struct_with_scopes_and_attributes() {
    let input = indoc! {"
        [heap]
        pub struct Point {
        	x int
        mut:
        	y int = 5 [json: 'why']
        pub mut:
        	Base
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (struct_declaration
        (attribute_list
          (attribute_declaration
            (attribute_spec
              (identifier))))
        (type_identifier)
        (struct_field_declaration_list
          (struct_field_declaration
            (field_identifier)
            (builtin_type))
          (struct_field_scope)
          (struct_field_declaration
            (field_identifier)
            (builtin_type)
            (int_literal)
            (attribute_declaration
              (attribute_spec
                (identifier)
                (interpreted_string_literal))))
          (struct_field_scope)
          (struct_field_declaration
            (type_identifier)))))
    ");
}

#[test]
fn pub_struct_and_union() {
    let input = indoc! {"
        pub struct Point {
        	x int
        }

        pub union Bits {
        	i int
        	f f64
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (struct_declaration
        (type_identifier)
        (struct_field_declaration_list
          (struct_field_declaration
            (field_identifier)
            (builtin_type))))
      (struct_declaration
        (type_identifier)
        (struct_field_declaration_list
          (struct_field_declaration
            (field_identifier)
            (builtin_type))
          (struct_field_declaration
            (field_identifier)
            (builtin_type)))))
    ");
}

#[test]
fn enum_declaration() {
    let input = indoc! {"
        enum Color as u8 {
        	red = 1
        	green
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (enum_declaration
        (type_identifier)
        (builtin_type)
        (enum_member_declaration_list
          (enum_member
            (identifier)
            (int_literal))
          (enum_member
            (identifier)))))
    ");
}

#[test]
fn interface_declaration() {
    let input = indoc! {"
        interface Speaker {
        	name string
        mut:
        	speak(msg string) string
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (interface_declaration
        (type_identifier)
        (interface_spec_list
          (struct_field_declaration
            (field_identifier)
            (builtin_type))
          (interface_field_scope)
          (interface_spec
            (field_identifier)
            (parameter_list
              (parameter_declaration
                (identifier)
                (builtin_type)))
            (builtin_type)))))
    ");
}

#[test]
fn sum_type() {
    insta::assert_snapshot!(expect_valid("type Shape = Circle | Square\n"), @r"
    (source_file
      (type_declaration
        (type_identifier)
        (type_identifier)
        (type_identifier)))
    ");
}

#[test]
fn method_with_generics() {
    let input = indoc! {"
        pub fn (mut p Point) move<T>(dx T) {
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (function_declaration
        (parameter_list
          (parameter_declaration
            (identifier)
            (type_identifier)))
        (identifier)
        (type_parameters
          (type_parameter_declaration
            (type_placeholder)))
        (parameter_list
          (parameter_declaration
            (identifier)
            (type_placeholder)))
        (block)))
    ");
}

#[test]
fn operator_overload() {
    let input = indoc! {"
        fn (a Vec) + (b Vec) Vec {
        	return a
        }
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (function_declaration
        (parameter_list
          (parameter_declaration
            (identifier)
            (type_identifier)))
        (overloadable_operator)
        (parameter_list
          (parameter_declaration
            (identifier)
            (type_identifier)))
        (type_identifier)
        (block
          (return_statement
            (expression_list
              (identifier))))))
    ");
}

#[test]
fn c_interop() {
    let input = indoc! {"
        #include <stdio.h>
        #flag -lm
        #define FOO 1
        fn C.printf(fmt &char, ...) int
    "};
    insta::assert_snapshot!(expect_valid(input), @r"
    (source_file
      (c_include_clause)
      (c_flag_clause)
      (c_define_clause
        (identifier))
      (function_declaration
        (binded_identifier
          (identifier))
        (parameter_list
          (parameter_declaration
            (identifier)
            (pointer_type
              (builtin_type)))
          (parameter_declaration
            (variadic_type)))
        (builtin_type)))
    ");
}
