//! Naming heuristics used by the designer
//!
//! Every rule here is a pure function over strings so it can be tested in
//! isolation and reused by the emitters.

use crate::analysis::Field;
use crate::core::utils::to_kebab_case;
use crate::design::{EndpointResponse, HttpMethod, ParameterLocation};

/// Method rules in priority order. The first prefix that matches the
/// lower-cased function name decides the method.
pub const METHOD_RULES: &[(&str, HttpMethod)] = &[
    ("get", HttpMethod::Get),
    ("create", HttpMethod::Post),
    ("add", HttpMethod::Post),
    ("update", HttpMethod::Put),
    ("delete", HttpMethod::Delete),
];

/// Method used when no rule matches
pub const DEFAULT_METHOD: HttpMethod = HttpMethod::Post;

/// Status code of the single success response
pub const SUCCESS_STATUS: u16 = 200;

/// Response type text of functions without results
pub const EMPTY_RESPONSE_TYPE: &str = "OK";

const SCALAR_TYPES: &[&str] = &[
    "string", "bool", "byte", "rune", "int", "int8", "int16", "int32", "int64", "uint", "uint8",
    "uint16", "uint32", "uint64", "uintptr", "float32", "float64",
];

/// Infer the HTTP method of a function from its name.
///
/// ```
/// use restforge::design::{HttpMethod, rules::infer_http_method};
///
/// assert_eq!(infer_http_method("GetUser"), HttpMethod::Get);
/// assert_eq!(infer_http_method("processOrder"), HttpMethod::Post);
/// ```
pub fn infer_http_method(function_name: &str) -> HttpMethod {
    let lowered = function_name.to_lowercase();
    METHOD_RULES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|(_, method)| *method)
        .unwrap_or(DEFAULT_METHOD)
}

/// Derive the route of a function: `prefix` followed by `/` and the kebab-cased name.
pub fn derive_path(prefix: &str, function_name: &str) -> String {
    format!("{prefix}/{}", to_kebab_case(function_name))
}

/// Shape of `path` as a router sees it: every `{name}` segment becomes `{}`.
///
/// ```
/// use restforge::design::rules::route_pattern;
///
/// assert_eq!(route_pattern("/get-user/{userId}"), "/get-user/{}");
/// assert_eq!(route_pattern("/get-user/{id}"), route_pattern("/get-user/{userId}"));
/// ```
pub fn route_pattern(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.starts_with('{') && segment.ends_with('}') {
                "{}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// One success response whose type text lists the result types in order.
pub fn shape_responses(results: &[Field]) -> Vec<EndpointResponse> {
    let type_text = if results.is_empty() {
        EMPTY_RESPONSE_TYPE.to_string()
    } else {
        results
            .iter()
            .map(|r| r.type_text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![EndpointResponse {
        status_code: SUCCESS_STATUS,
        type_text,
    }]
}

/// Name of the parameter at `index`; blank and `_` parameters become `arg<n>`.
pub fn parameter_name(index: usize, declared: &str) -> String {
    if declared.is_empty() || declared == "_" {
        format!("arg{}", index + 1)
    } else {
        declared.to_string()
    }
}

/// `id`, `userId`, `orderID` and the like
pub fn is_identifier_like(name: &str) -> bool {
    name == "id" || name.ends_with("Id") || name.ends_with("ID")
}

/// Built-in Go types that travel as a single URL value
pub fn is_scalar_type(type_text: &str) -> bool {
    SCALAR_TYPES.contains(&type_text)
}

/// Location of a parameter under the inferred strategy.
pub fn infer_location(method: HttpMethod, parameter: &Field) -> ParameterLocation {
    if !is_scalar_type(&parameter.type_text) {
        return ParameterLocation::Body;
    }

    match method {
        HttpMethod::Get | HttpMethod::Delete | HttpMethod::Put
            if is_identifier_like(&parameter.name) =>
        {
            ParameterLocation::Path
        }
        HttpMethod::Get | HttpMethod::Delete => ParameterLocation::Query,
        _ => ParameterLocation::Body,
    }
}
