//! Go test suite exercising the generated router

use serde::Serialize;
use std::sync::Arc;

use crate::core::utils::upper_first;
use crate::design::{ApiModel, EndpointDescriptor, HttpMethod, ParameterLocation};
use crate::generation::{ArtifactEmitter, ArtifactKind, EmitError};
use crate::infrastructure::generation::TeraTemplateRenderer;
use crate::infrastructure::generation::go_support::{
    IdentAllocator, go_string, json_sample, url_sample,
};
use crate::infrastructure::templates::TESTS_TEMPLATE;

/// `go test` treats this name as the package entry point, so it is never handed out.
const RESERVED_TEST_NAME: &str = "TestMain";

#[derive(Debug, Serialize)]
struct TestsView {
    package: String,
    uses_body: bool,
    tests: Vec<TestCaseView>,
}

#[derive(Debug, Serialize)]
struct TestCaseView {
    name: String,
    function_name: String,
    method_name: &'static str,
    method: &'static str,
    path: String,
    url: String,
    has_body: bool,
    body_fields: Vec<BodyFieldView>,
    message: String,
}

#[derive(Debug, Serialize)]
struct BodyFieldView {
    key: String,
    value: String,
}

/// Renders one `Test<Function>` per endpoint
pub struct TestEmitter {
    renderer: Arc<TeraTemplateRenderer>,
    package: String,
    file_name: String,
}

impl TestEmitter {
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

    fn view(&self, model: &ApiModel) -> TestsView {
        let mut names = IdentAllocator::new();
        names.allocate(RESERVED_TEST_NAME);

        let serving = model.serving_indices();
        let tests: Vec<TestCaseView> = model
            .iter()
            .enumerate()
            .map(|(index, endpoint)| {
                // Requests reach whichever handler the router kept for this route
                let served = serving
                    .get(index)
                    .and_then(|&i| model.endpoints.get(i))
                    .unwrap_or(endpoint);
                let name = names.allocate(&format!("Test{}", upper_first(&endpoint.function_name)));
                test_case(endpoint, served, name)
            })
            .collect();

        TestsView {
            package: self.package.clone(),
            uses_body: tests.iter().any(|t| t.has_body),
            tests,
        }
    }
}

fn method_constant(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "http.MethodGet",
        HttpMethod::Post => "http.MethodPost",
        HttpMethod::Put => "http.MethodPut",
        HttpMethod::Delete => "http.MethodDelete",
    }
}

/// Request URL with sample values substituted for path parameters and
/// appended for query parameters.
fn sample_url(endpoint: &EndpointDescriptor) -> String {
    let mut url = endpoint.path.clone();
    for param in endpoint.parameters_in(ParameterLocation::Path) {
        url = url.replace(
            &format!("{{{}}}", param.name),
            &url_sample(&param.name, &param.type_text),
        );
    }

    let query: Vec<String> = endpoint
        .parameters_in(ParameterLocation::Query)
        .map(|p| format!("{}={}", p.name, url_sample(&p.name, &p.type_text)))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

fn test_case(
    endpoint: &EndpointDescriptor,
    served: &EndpointDescriptor,
    name: String,
) -> TestCaseView {
    let has_body = served.method.has_request_body();
    let body_fields = if has_body {
        served
            .parameters_in(ParameterLocation::Body)
            .map(|p| BodyFieldView {
                key: go_string(&p.name),
                value: json_sample(&p.name, &p.type_text),
            })
            .collect()
    } else {
        Vec::new()
    };

    TestCaseView {
        name,
        function_name: endpoint.function_name.clone(),
        method_name: served.method.as_str(),
        method: method_constant(served.method),
        path: served.path.clone(),
        url: go_string(&sample_url(served)),
        has_body,
        body_fields,
        message: go_string(&format!("{} executed successfully", served.function_name)),
    }
}

impl ArtifactEmitter for TestEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Tests
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, model: &ApiModel) -> Result<String, EmitError> {
        self.renderer
            .render(self.kind(), TESTS_TEMPLATE, &self.view(model))
    }
}
