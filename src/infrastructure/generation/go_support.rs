//! Helpers for emitting Go source
//!
//! Type texts come from the declaration extractor and are only trusted as far
//! as the built-in types go: anything referring to a named, qualified or
//! opaque type is decoded as raw JSON so the generated package compiles on its
//! own.

use std::collections::HashSet;

use crate::core::utils::upper_first;

/// Field type used for parameters that cannot be decoded portably
pub const RAW_JSON_TYPE: &str = "json.RawMessage";

const INTEGER_TYPES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "byte", "rune",
];

const FLOAT_TYPES: &[&str] = &["float32", "float64"];

pub fn is_integer_type(type_text: &str) -> bool {
    INTEGER_TYPES.contains(&type_text)
}

pub fn is_float_type(type_text: &str) -> bool {
    FLOAT_TYPES.contains(&type_text)
}

fn is_builtin_scalar(type_text: &str) -> bool {
    type_text == "string" || type_text == "bool" || is_integer_type(type_text) || is_float_type(type_text)
}

/// Whether `encoding/json` can decode into this type without any declaration
/// outside the generated file.
pub fn is_portable_type(type_text: &str) -> bool {
    if let Some(inner) = type_text.strip_prefix('*') {
        return is_portable_type(inner);
    }
    if let Some(inner) = type_text.strip_prefix("[]") {
        return is_portable_type(inner);
    }
    if let Some(rest) = type_text.strip_prefix("map[") {
        return match split_map(rest) {
            Some((key, value)) => {
                (key == "string" || is_integer_type(key)) && is_portable_type(value)
            }
            None => false,
        };
    }
    is_builtin_scalar(type_text) || type_text == "interface{}" || type_text == "any"
}

/// Split `K]V` at the bracket closing the map key.
fn split_map(rest: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (index, ch) in rest.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' if depth == 0 => return Some((&rest[..index], &rest[index + 1..])),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Type of the request struct field carrying a parameter
pub fn struct_field_type(type_text: &str) -> String {
    if is_portable_type(type_text) {
        type_text.to_string()
    } else {
        RAW_JSON_TYPE.to_string()
    }
}

/// Convert `{name}` route segments to Gin's `:name` syntax.
///
/// ```
/// use restforge::infrastructure::generation::go_support::gin_path;
///
/// assert_eq!(gin_path("/get-user/{id}"), "/get-user/:id");
/// ```
pub fn gin_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => format!(":{name}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Go string literal for `value`
pub fn go_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Go expression used as the JSON sample of a body parameter
pub fn json_sample(name: &str, type_text: &str) -> String {
    match type_text {
        "string" => go_string(&format!("sample_{name}")),
        "bool" => "true".to_string(),
        t if is_integer_type(t) => "1".to_string(),
        t if is_float_type(t) => "1.5".to_string(),
        _ => "nil".to_string(),
    }
}

/// Raw URL text used as the sample of a path or query parameter
pub fn url_sample(name: &str, type_text: &str) -> String {
    match type_text {
        "bool" => "true".to_string(),
        t if is_integer_type(t) => "1".to_string(),
        t if is_float_type(t) => "1.5".to_string(),
        _ => format!("sample_{name}"),
    }
}

/// Hands out Go identifiers, suffixing `2`, `3`, ... on collision.
#[derive(Debug, Default)]
pub struct IdentAllocator {
    used: HashSet<String>,
}

impl IdentAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Exported struct field name for a parameter
pub fn exported_field_name(name: &str) -> String {
    upper_first(name)
}
