/// Convert PascalCase or camelCase to snake_case.
///
/// Every uppercase letter starts a new word, so `CStringLiteral` becomes
/// `c_string_literal`.
///
/// # Examples
/// ```
/// use vsyntax_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("ShortVarDeclaration"), "short_var_declaration");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case to PascalCase, the inverse of [`to_snake_case`] for
/// names without acronyms.
///
/// # Examples
/// ```
/// use vsyntax_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("binary_expression"), "BinaryExpression");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
