//! OpenAPI 3.0 document describing the designed endpoints

use openapiv3::{
    BooleanType, Info, IntegerType, NumberType, OpenAPI, Operation, Parameter, ParameterData,
    ParameterSchemaOrContent, PathItem, PathStyle, Paths, QueryStyle, ReferenceOr, Response,
    Responses, Schema, SchemaData, SchemaKind, StatusCode, StringType, Type,
};

use crate::design::{ApiModel, EndpointDescriptor, EndpointParameter, HttpMethod, ParameterLocation};
use crate::generation::{ArtifactEmitter, ArtifactKind, EmitError};

pub const OPENAPI_VERSION: &str = "3.0.0";

/// Builds the document with `openapiv3` types and serializes it as indented JSON
pub struct OpenApiEmitter {
    title: String,
    version: String,
    file_name: String,
}

impl OpenApiEmitter {
    pub fn new(
        title: impl Into<String>,
        version: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            file_name: file_name.into(),
        }
    }

    /// Build the document. Paths keep endpoint order and only serving
    /// endpoints appear: a shadowed endpoint contributes the operation of the
    /// endpoint serving its route, under that endpoint's path.
    pub fn document(&self, model: &ApiModel) -> OpenAPI {
        let endpoints: Vec<_> = model.iter().collect();
        let mut paths = Paths::default();
        for served in model.serving_indices() {
            let endpoint = endpoints[served];
            let entry = paths
                .paths
                .entry(endpoint.path.clone())
                .or_insert_with(|| ReferenceOr::Item(PathItem::default()));
            if let ReferenceOr::Item(item) = entry {
                let operation = Some(operation(endpoint));
                match endpoint.method {
                    HttpMethod::Get => item.get = operation,
                    HttpMethod::Post => item.post = operation,
                    HttpMethod::Put => item.put = operation,
                    HttpMethod::Delete => item.delete = operation,
                }
            }
        }

        OpenAPI {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: self.title.clone(),
                version: self.version.clone(),
                ..Default::default()
            },
            paths,
            ..Default::default()
        }
    }
}

fn operation(endpoint: &EndpointDescriptor) -> Operation {
    let mut responses = Responses::default();
    for response in &endpoint.responses {
        responses.responses.insert(
            StatusCode::Code(response.status_code),
            ReferenceOr::Item(Response {
                description: response.type_text.clone(),
                ..Default::default()
            }),
        );
    }

    Operation {
        summary: Some(format!("{} operation", endpoint.function_name)),
        description: Some(format!("Endpoint for {}", endpoint.function_name)),
        operation_id: Some(endpoint.function_name.clone()),
        parameters: endpoint
            .parameters
            .iter()
            .map(|p| ReferenceOr::Item(parameter(p)))
            .collect(),
        responses,
        ..Default::default()
    }
}

fn parameter(parameter: &EndpointParameter) -> Parameter {
    let in_path = parameter.location == ParameterLocation::Path;
    let parameter_data = ParameterData {
        name: parameter.name.clone(),
        description: Some(format!("Parameter {}", parameter.name)),
        required: in_path,
        deprecated: None,
        format: ParameterSchemaOrContent::Schema(ReferenceOr::Item(schema_for(
            &parameter.type_text,
        ))),
        example: None,
        examples: Default::default(),
        explode: None,
        extensions: Default::default(),
    };

    if in_path {
        Parameter::Path {
            parameter_data,
            style: PathStyle::Simple,
        }
    } else {
        Parameter::Query {
            parameter_data,
            allow_reserved: false,
            style: QueryStyle::Form,
            allow_empty_value: None,
        }
    }
}

/// JSON schema type of a Go type text
pub fn schema_for(type_text: &str) -> Schema {
    let kind = match type_text {
        "int" | "int32" | "int64" => Type::Integer(IntegerType::default()),
        "float32" | "float64" => Type::Number(NumberType::default()),
        "bool" => Type::Boolean(BooleanType::default()),
        _ => Type::String(StringType::default()),
    };
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(kind),
    }
}

impl ArtifactEmitter for OpenApiEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::OpenApi
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, model: &ApiModel) -> Result<String, EmitError> {
        serde_json::to_string_pretty(&self.document(model))
            .map_err(|e| EmitError::render(self.kind(), e.to_string()))
    }
}
