//! End-to-end tests for the extraction, design and emission pipeline

use std::path::{Path, PathBuf};
use std::sync::Arc;

use restforge::application::{
    AnalyzeRequest, AnalyzeUseCase, ApplicationError, GenerateApiRequest, GenerateApiResponse,
    GenerateApiUseCase,
};
use restforge::core::Config;
use restforge::design::{DesignError, DuplicatePolicy, HttpMethod, LocationStrategy};
use restforge::generation::ArtifactKind;
use restforge::infrastructure::FileSystemOutputService;
use restforge::infrastructure::generation::GinEmitterFactory;
use serde_json::Value;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn use_case() -> GenerateApiUseCase {
    GenerateApiUseCase::new(
        Arc::new(FileSystemOutputService::new()),
        Arc::new(GinEmitterFactory::new()),
    )
}

async fn generate(
    source: PathBuf,
    output_dir: &Path,
    config: Config,
) -> Result<GenerateApiResponse, ApplicationError> {
    use_case()
        .execute(GenerateApiRequest {
            source,
            output_dir: output_dir.to_path_buf(),
            config,
        })
        .await
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

#[tokio::test]
async fn test_users_fixture_end_to_end() {
    let out = TempDir::new().unwrap();
    let response = generate(fixture("users"), out.path(), Config::default())
        .await
        .unwrap();

    assert!(response.report.is_success());
    assert_eq!(response.functions, 7);

    // orders.go sorts before users.go
    let routes: Vec<_> = response
        .model
        .iter()
        .map(|e| (e.method, e.path.as_str()))
        .collect();
    assert_eq!(
        routes,
        vec![
            (HttpMethod::Get, "/get-orders"),
            (HttpMethod::Post, "/create-user"),
            (HttpMethod::Get, "/get-user"),
            (HttpMethod::Put, "/update-user"),
            (HttpMethod::Delete, "/delete-user"),
            (HttpMethod::Post, "/add-tags"),
            (HttpMethod::Post, "/process"),
        ]
    );

    let handlers = read(out.path(), "generated_handlers.go");
    assert!(handlers.starts_with("// Code generated by restforge. DO NOT EDIT."));
    assert!(handlers.contains("package main"));
    assert!(handlers.contains("router.POST(\"/create-user\", CreateUserHandler)"));
    assert!(handlers.contains("type CreateUserRequest struct {"));
    assert!(handlers.contains("Name string `json:\"name\"`"));
    // User is not a portable type
    assert!(handlers.contains("User json.RawMessage `json:\"user\"`"));
    assert!(handlers.contains("\"encoding/json\""));
    assert!(handlers.contains("func processHandler(c *gin.Context)"));
    assert!(handlers.contains("Arg2 bool `json:\"arg2\"`"));
    assert!(handlers.contains("func main() {"));

    let tests = read(out.path(), "generated_handlers_test.go");
    assert!(tests.contains("func TestCreateUser(t *testing.T)"));
    assert!(tests.contains("func TestProcess(t *testing.T)"));
    assert!(tests.contains("\"github.com/stretchr/testify/assert\""));
    assert!(tests.contains("\"CreateUser executed successfully\""));

    let doc: Value = serde_json::from_str(&read(out.path(), "openapi.json")).unwrap();
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"]["title"], "Generated API");
    assert_eq!(doc["paths"].as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn test_artifacts_agree_on_routes() {
    let out = TempDir::new().unwrap();
    let response = generate(fixture("users"), out.path(), Config::default())
        .await
        .unwrap();

    let handlers = read(out.path(), "generated_handlers.go");
    let tests = read(out.path(), "generated_handlers_test.go");
    let doc: Value = serde_json::from_str(&read(out.path(), "openapi.json")).unwrap();

    for endpoint in response.model.iter() {
        let method = endpoint.method.as_str();
        assert!(
            handlers.contains(&format!("router.{method}(\"{}\"", endpoint.path)),
            "handlers missing {method} {}",
            endpoint.path
        );
        assert!(
            tests.contains(&format!("calls {method} {} (", endpoint.path)),
            "tests missing {method} {}",
            endpoint.path
        );
        let operation = &doc["paths"][&endpoint.path][method.to_lowercase()];
        assert_eq!(operation["operationId"], endpoint.function_name.as_str());
    }
}

#[tokio::test]
async fn test_inferred_locations_reach_every_artifact() {
    let out = TempDir::new().unwrap();
    let config = Config {
        parameter_locations: LocationStrategy::Inferred,
        api_prefix: "/api/v1".to_string(),
        ..Default::default()
    };
    generate(fixture("users"), out.path(), config).await.unwrap();

    let handlers = read(out.path(), "generated_handlers.go");
    assert!(handlers.contains("router.GET(\"/api/v1/get-user/:id\", GetUserHandler)"));
    assert!(handlers.contains("idParam := c.Param(\"id\")"));
    assert!(handlers.contains("pageParam := c.Query(\"page\")"));
    assert!(handlers.contains("router.PUT(\"/api/v1/update-user/:id\", UpdateUserHandler)"));

    let doc: Value = serde_json::from_str(&read(out.path(), "openapi.json")).unwrap();
    let get_user = &doc["paths"]["/api/v1/get-user/{id}"]["get"];
    assert_eq!(get_user["parameters"][0]["in"], "path");
    assert_eq!(get_user["parameters"][0]["required"], true);

    let orders = &doc["paths"]["/api/v1/get-orders/{userID}"]["get"];
    let locations: Vec<_> = orders["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["in"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(locations, vec!["path", "query", "query"]);

    let tests = read(out.path(), "generated_handlers_test.go");
    assert!(tests.contains("/api/v1/get-orders/"));
    assert!(tests.contains("page="));
}

#[tokio::test]
async fn test_output_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    generate(fixture("users"), first.path(), Config::default())
        .await
        .unwrap();
    generate(fixture("users"), second.path(), Config::default())
        .await
        .unwrap();

    for name in [
        "generated_handlers.go",
        "generated_handlers_test.go",
        "openapi.json",
    ] {
        assert_eq!(read(first.path(), name), read(second.path(), name), "{name}");
    }
}

#[tokio::test]
async fn test_broken_template_override_fails_only_its_artifact() {
    let templates = TempDir::new().unwrap();
    std::fs::write(
        templates.path().join("handlers.go.tera"),
        "package {{ package }\n{% for %}",
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    let config = Config {
        template_dir: Some(templates.path().to_path_buf()),
        ..Default::default()
    };
    let response = generate(fixture("users"), out.path(), config)
        .await
        .unwrap();

    assert!(!response.report.is_success());
    let failed: Vec<_> = response.report.failures().map(|(kind, _)| kind).collect();
    assert_eq!(failed, vec![ArtifactKind::Handlers]);
    assert!(!out.path().join("generated_handlers.go").exists());
    assert!(out.path().join("openapi.json").is_file());
    assert!(out.path().join("generated_handlers_test.go").is_file());
}

#[tokio::test]
async fn test_template_override_replaces_embedded_template() {
    let templates = TempDir::new().unwrap();
    std::fs::write(
        templates.path().join("handlers.go.tera"),
        "package {{ package }}\n// {{ handlers | length }} handlers\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    let config = Config {
        template_dir: Some(templates.path().to_path_buf()),
        package_name: "users".to_string(),
        ..Default::default()
    };
    generate(fixture("users"), out.path(), config).await.unwrap();

    assert_eq!(
        read(out.path(), "generated_handlers.go"),
        "package users\n// 7 handlers\n"
    );
    // Tests still come from the embedded template
    assert!(read(out.path(), "generated_handlers_test.go").contains("package users"));
}

#[tokio::test]
async fn test_duplicate_routes_are_rejected_by_default() {
    let out = TempDir::new().unwrap();
    let output_dir = out.path().join("generated");
    let error = generate(fixture("duplicates"), &output_dir, Config::default())
        .await
        .unwrap_err();

    match error {
        ApplicationError::Design(DesignError::DuplicateEndpoint {
            method, path, ..
        }) => {
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, "/get-user");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_allowed_duplicates_register_the_last_route() {
    let out = TempDir::new().unwrap();
    let config = Config {
        duplicates: DuplicatePolicy::Allow,
        ..Default::default()
    };
    let response = generate(fixture("duplicates"), out.path(), config)
        .await
        .unwrap();

    assert!(response.report.is_success());
    assert_eq!(response.model.len(), 2);

    let handlers = read(out.path(), "generated_handlers.go");
    assert_eq!(handlers.matches("router.GET(\"/get-user\"").count(), 1);
    assert!(handlers.contains("router.GET(\"/get-user\", GetUserHandler2)"));
    assert!(handlers.contains("is served by GetUserHandler2"));

    let doc: Value = serde_json::from_str(&read(out.path(), "openapi.json")).unwrap();
    assert_eq!(doc["paths"].as_object().unwrap().len(), 1);
}

fn parameter_name_collision_source() -> TempDir {
    let source = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("users.go"),
        "package users\n\nfunc GetUser(id string) {}\n\nfunc getUser(userId string) {}\n",
    )
    .unwrap();
    source
}

#[tokio::test]
async fn test_inferred_routes_differing_in_parameter_name_are_rejected() {
    let source = parameter_name_collision_source();
    let out = TempDir::new().unwrap();
    let output_dir = out.path().join("generated");
    let config = Config {
        parameter_locations: LocationStrategy::Inferred,
        ..Default::default()
    };
    let error = generate(source.path().to_path_buf(), &output_dir, config)
        .await
        .unwrap_err();

    match error {
        ApplicationError::Design(DesignError::DuplicateEndpoint {
            method, path, ..
        }) => {
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, "/get-user/{userId}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_inferred_routes_differing_in_parameter_name_register_once() {
    let source = parameter_name_collision_source();
    let out = TempDir::new().unwrap();
    let config = Config {
        parameter_locations: LocationStrategy::Inferred,
        duplicates: DuplicatePolicy::Allow,
        ..Default::default()
    };
    let response = generate(source.path().to_path_buf(), out.path(), config)
        .await
        .unwrap();
    assert!(response.report.is_success());
    assert_eq!(response.model.len(), 2);

    let handlers = read(out.path(), "generated_handlers.go");
    assert_eq!(handlers.matches("router.GET(\"/get-user/:").count(), 1);
    assert!(handlers.contains("router.GET(\"/get-user/:userId\", getUserHandler)"));
    assert!(handlers.contains("is served by getUserHandler"));

    let tests = read(out.path(), "generated_handlers_test.go");
    assert_eq!(tests.matches("\"getUser executed successfully\"").count(), 2);

    let doc: Value = serde_json::from_str(&read(out.path(), "openapi.json")).unwrap();
    let paths = doc["paths"].as_object().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        doc["paths"]["/get-user/{userId}"]["get"]["operationId"],
        "getUser"
    );
}

#[tokio::test]
async fn test_analyze_writes_nothing() {
    let config = Config {
        exclude_functions: vec!["process".to_string()],
        ..Default::default()
    };
    let response = AnalyzeUseCase::new()
        .execute(AnalyzeRequest {
            source: fixture("users"),
            config,
        })
        .await
        .unwrap();

    assert_eq!(response.functions.len(), 7);
    assert_eq!(response.model.len(), 6);
    assert!(response.model.iter().all(|e| e.function_name != "process"));
}
