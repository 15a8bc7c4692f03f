//! String transformation utilities for code generation

/// Converts a camelCase or PascalCase identifier to kebab-case.
///
/// A `-` is inserted before every upper-case character that is not the first
/// character, and every character is lower-cased. Nothing else is touched, so
/// acronyms split per letter (`getHTTP` becomes `get-h-t-t-p`).
///
/// # Examples
/// ```
/// use restforge::core::utils::to_kebab_case;
///
/// assert_eq!(to_kebab_case("CreateSoftwareInfo"), "create-software-info");
/// assert_eq!(to_kebab_case("getUser"), "get-user");
/// assert_eq!(to_kebab_case("foo"), "foo");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            result.push('-');
        }
        result.extend(ch.to_lowercase());
    }
    result
}

/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// Go exports identifiers by capitalisation, so this turns a parameter or
/// function name into an exported identifier.
///
/// # Examples
/// ```
/// use restforge::core::utils::upper_first;
///
/// assert_eq!(upper_first("process"), "Process");
/// assert_eq!(upper_first("CreateUser"), "CreateUser");
/// assert_eq!(upper_first(""), "");
/// ```
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Reserved words of the Go language
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

pub fn is_go_keyword(s: &str) -> bool {
    GO_KEYWORDS.contains(&s)
}

/// Returns true if `s` is a valid Go identifier. Keywords are not identifiers.
pub fn is_go_identifier(s: &str) -> bool {
    if is_go_keyword(s) {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
