use crate::parser::parse;
use crate::parser::tests::expect_invalid;

#[test]
fn dangling_binary_operator() {
    insta::assert_snapshot!(expect_invalid("x := 1 +\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (binary_expression
            (int_literal)
            (MISSING identifier)))))
    error at 9..9: expected an expression
    ");
}

#[test]
fn if_without_block() {
    insta::assert_snapshot!(expect_invalid("if x\n"), @r#"
    (source_file
      (if_expression
        (identifier)
        (MISSING "{")))
    error at 4..5: expected a block
    "#);
}

#[test]
fn two_statements_on_one_line() {
    insta::assert_snapshot!(expect_invalid("x := 1 y := 2\n"), @r"
    (source_file
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal)))
      (MISSING terminator)
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    error at 7..8: expected newline or `;` after statement (hint: put each statement on its own line)
    ");
}

#[test]
fn attribute_without_declaration() {
    insta::assert_snapshot!(expect_invalid("[inline]\nx := 1\n"), @r"
    (source_file
      (attribute_list
        (attribute_declaration
          (attribute_spec
            (identifier))))
      (short_var_declaration
        (expression_list
          (identifier))
        (expression_list
          (int_literal))))
    warning at 0..8: attribute is not followed by a declaration
    ");
}

#[test]
fn broken_sources_stay_lossless() {
    let sources = [
        "fn",
        "import",
        "'${",
        "x := 1 +\n",
        "if x\n",
        "foo(1, 2\n",
        "fn main() {\n\tx := 1\n",
        "struct Foo {\n\tx int )\n}\n",
        "x := 1 /* oops\n",
        "#foo bar\n",
        "s := 'a\\qb\n",
    ];
    for source in sources {
        let (parse, _) = parse(source).expect("fuel exhausted");
        assert_eq!(parse.syntax().text().to_string(), source);
        assert!(parse.had_errors(), "no error node for {source:?}");
    }
}
