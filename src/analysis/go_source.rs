//! Go declaration parsing on top of the tree-sitter Go grammar.
//!
//! Only top-level `func` declarations are inspected. Function bodies are never
//! looked at, and type expressions are flattened to short textual summaries by
//! [`render_type`].

use std::path::Path;
use tree_sitter::{Language, Node, Parser, Point};

use crate::analysis::{Field, FunctionDescriptor, Origin, ParseCause};

/// Type text of any function-typed parameter or result
pub const OPAQUE_FUNCTION_TYPE: &str = "func()";

/// Type text of interface types
pub const INTERFACE_TYPE: &str = "interface{}";

/// Type text of every type expression the renderer does not recognise
pub const UNKNOWN_TYPE: &str = "unknown";

fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go `source` and return one descriptor per function or method
/// declaration, in file order. `path` is only recorded as the origin.
pub fn parse_declarations(path: &Path, source: &str) -> Result<Vec<FunctionDescriptor>, ParseCause> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| ParseCause::Grammar(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseCause::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let point = first_error(root).unwrap_or_else(|| root.start_position());
        return Err(ParseCause::Syntax {
            line: point.row + 1,
            column: point.column + 1,
        });
    }

    let mut has_package = false;
    let mut functions = Vec::new();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => has_package = true,
            "function_declaration" | "method_declaration" => {
                functions.push(describe(node, path, source));
            }
            _ => {}
        }
    }

    if !has_package {
        return Err(ParseCause::MissingPackage);
    }

    Ok(functions)
}

fn describe(decl: Node<'_>, path: &Path, source: &str) -> FunctionDescriptor {
    let name = decl
        .child_by_field_name("name")
        .map(|n| text(n, source).to_string())
        .unwrap_or_default();

    let receiver_type = if decl.kind() == "method_declaration" {
        Some(
            decl.child_by_field_name("receiver")
                .and_then(|list| receiver_type(list, source))
                .unwrap_or_default(),
        )
    } else {
        None
    };

    FunctionDescriptor {
        name,
        receiver_type,
        parameters: fields(decl.child_by_field_name("parameters"), source),
        results: fields(decl.child_by_field_name("result"), source),
        is_generic: decl.child_by_field_name("type_parameters").is_some(),
        origin: Origin {
            file: path.to_path_buf(),
            line: decl.start_position().row + 1,
        },
    }
}

fn receiver_type(list: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = list.walk();
    let first = list
        .named_children(&mut cursor)
        .find(|n| n.kind() == "parameter_declaration")?;
    Some(render_field_type(first, source))
}

/// Expand a parameter or result list into fields. A bare result type
/// (`func f() error`) is a single unnamed field.
fn fields(list: Option<Node<'_>>, source: &str) -> Vec<Field> {
    let Some(list) = list else {
        return Vec::new();
    };

    if list.kind() != "parameter_list" {
        return vec![Field::unnamed(render_type(list, source))];
    }

    let mut fields = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" | "variadic_parameter_declaration" => {
                let type_text = if decl.kind() == "variadic_parameter_declaration" {
                    UNKNOWN_TYPE.to_string()
                } else {
                    render_field_type(decl, source)
                };

                let mut name_cursor = decl.walk();
                let names: Vec<&str> = decl
                    .children_by_field_name("name", &mut name_cursor)
                    .map(|n| text(n, source))
                    .collect();

                if names.is_empty() {
                    fields.push(Field::unnamed(type_text));
                } else {
                    fields.extend(names.into_iter().map(|n| Field::new(n, type_text.clone())));
                }
            }
            // comments between parameters
            _ => {}
        }
    }
    fields
}

fn render_field_type(decl: Node<'_>, source: &str) -> String {
    decl.child_by_field_name("type")
        .map(|t| render_type(t, source))
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
}

/// Render a type expression node to its textual summary.
///
/// | node                          | text            |
/// |-------------------------------|-----------------|
/// | identifier                    | the identifier  |
/// | pointer `*T`                  | `*T`            |
/// | slice or array `[]T`, `[N]T`  | `[]T`           |
/// | map                           | `map[K]V`       |
/// | qualified `pkg.Name`          | `pkg.Name`      |
/// | function type                 | `func()`        |
/// | interface type                | `interface{}`   |
/// | anything else                 | `unknown`       |
pub fn render_type(node: Node<'_>, source: &str) -> String {
    let child = |field: &str| {
        node.child_by_field_name(field)
            .map(|n| render_type(n, source))
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
    };

    match node.kind() {
        "type_identifier" | "identifier" => text(node, source).to_string(),
        "pointer_type" => {
            let inner = node
                .named_child(0)
                .map(|n| render_type(n, source))
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
            format!("*{inner}")
        }
        "slice_type" | "array_type" | "implicit_length_array_type" => {
            format!("[]{}", child("element"))
        }
        "map_type" => format!("map[{}]{}", child("key"), child("value")),
        "qualified_type" => {
            let package = node
                .child_by_field_name("package")
                .map(|n| text(n, source))
                .unwrap_or(UNKNOWN_TYPE);
            let name = node
                .child_by_field_name("name")
                .map(|n| text(n, source))
                .unwrap_or(UNKNOWN_TYPE);
            format!("{package}.{name}")
        }
        "function_type" => OPAQUE_FUNCTION_TYPE.to_string(),
        "interface_type" => INTERFACE_TYPE.to_string(),
        _ => UNKNOWN_TYPE.to_string(),
    }
}

fn text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn first_error(node: Node<'_>) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(point) = first_error(child) {
                return Some(point);
            }
        }
    }
    None
}
