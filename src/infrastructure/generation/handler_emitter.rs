//! Gin handler scaffolding

use serde::Serialize;
use std::sync::Arc;

use crate::core::utils::upper_first;
use crate::design::{ApiModel, EndpointDescriptor, ParameterLocation};
use crate::generation::{ArtifactEmitter, ArtifactKind, EmitError};
use crate::infrastructure::generation::go_support::{
    IdentAllocator, RAW_JSON_TYPE, exported_field_name, gin_path, go_string, struct_field_type,
};
use crate::infrastructure::generation::TeraTemplateRenderer;
use crate::infrastructure::templates::HANDLERS_TEMPLATE;

#[derive(Debug, Serialize)]
struct HandlersView {
    package: String,
    uses_raw_json: bool,
    routes: Vec<RouteView>,
    handlers: Vec<HandlerView>,
}

#[derive(Debug, Serialize)]
struct RouteView {
    method: &'static str,
    path: String,
    path_literal: String,
    handler: String,
    /// Handler that actually serves this route when a later endpoint shadows it
    shadowed_by: Option<String>,
}

#[derive(Debug, Serialize)]
struct HandlerView {
    name: String,
    function_name: String,
    method: &'static str,
    path: String,
    request_type: Option<String>,
    fields: Vec<FieldView>,
    path_params: Vec<ValueParamView>,
    query_params: Vec<ValueParamView>,
    message: String,
}

#[derive(Debug, Serialize)]
struct FieldView {
    name: String,
    go_type: String,
    json_name: String,
}

#[derive(Debug, Serialize)]
struct ValueParamView {
    key: String,
    var: String,
}

/// Renders `SetupRouter` plus one Gin handler per endpoint
pub struct HandlerEmitter {
    renderer: Arc<TeraTemplateRenderer>,
    package: String,
    file_name: String,
}

impl HandlerEmitter {
    pub fn new(
        renderer: Arc<TeraTemplateRenderer>,
        package: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            package: package.into(),
            file_name: file_name.into(),
        }
    }

    fn view(&self, model: &ApiModel) -> HandlersView {
        let mut handler_names = IdentAllocator::new();
        let mut request_types = IdentAllocator::new();

        let handlers: Vec<HandlerView> = model
            .iter()
            .map(|endpoint| {
                let name = handler_names.allocate(&format!("{}Handler", endpoint.function_name));
                handler_view(endpoint, name, &mut request_types)
            })
            .collect();

        let serving = model.serving_indices();
        let routes = model
            .iter()
            .enumerate()
            .map(|(index, endpoint)| {
                let winner = serving.get(index).copied().unwrap_or(index);
                RouteView {
                    method: endpoint.method.as_str(),
                    path: endpoint.path.clone(),
                    path_literal: go_string(&gin_path(&endpoint.path)),
                    handler: handlers[index].name.clone(),
                    shadowed_by: (winner != index).then(|| handlers[winner].name.clone()),
                }
            })
            .collect();

        let uses_raw_json = handlers
            .iter()
            .flat_map(|h| &h.fields)
            .any(|f| f.go_type.contains(RAW_JSON_TYPE));

        HandlersView {
            package: self.package.clone(),
            uses_raw_json,
            routes,
            handlers,
        }
    }
}

fn handler_view(
    endpoint: &EndpointDescriptor,
    name: String,
    request_types: &mut IdentAllocator,
) -> HandlerView {
    let mut field_names = IdentAllocator::new();
    let fields: Vec<FieldView> = endpoint
        .parameters_in(ParameterLocation::Body)
        .map(|p| FieldView {
            name: field_names.allocate(&exported_field_name(&p.name)),
            go_type: struct_field_type(&p.type_text),
            json_name: p.name.clone(),
        })
        .collect();

    let request_type = (!fields.is_empty())
        .then(|| request_types.allocate(&format!("{}Request", upper_first(&endpoint.function_name))));

    let value_params = |location| {
        endpoint
            .parameters_in(location)
            .map(|p| ValueParamView {
                key: go_string(&p.name),
                var: format!("{}Param", p.name),
            })
            .collect::<Vec<_>>()
    };

    HandlerView {
        name,
        function_name: endpoint.function_name.clone(),
        method: endpoint.method.as_str(),
        path: endpoint.path.clone(),
        request_type,
        fields,
        path_params: value_params(ParameterLocation::Path),
        query_params: value_params(ParameterLocation::Query),
        message: go_string(&format!("{} executed successfully", endpoint.function_name)),
    }
}

impl ArtifactEmitter for HandlerEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Handlers
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, model: &ApiModel) -> Result<String, EmitError> {
        self.renderer
            .render(self.kind(), HANDLERS_TEMPLATE, &self.view(model))
    }
}
