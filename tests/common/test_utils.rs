use super::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use std::sync::Arc;
use swaad_ai::{
    generator::Generator,
    server::{AppState, router},
};

pub const TEST_MODEL: &str = "gpt-3.5-turbo";

/// Generator wired to a shared mock, so the test can inspect calls afterwards
pub fn create_test_generator(mock: &MockLlmClient) -> Generator {
    Generator::new(Arc::new(mock.clone()), TEST_MODEL)
}

/// Full application router backed by the given mock
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    router(AppState::new(create_test_generator(mock)))
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "----swaadboundary7MA4YWxkTrZu0gW";

/// A `multipart/form-data` POST, as a browser `FormData` submit or `curl -F` sends it
pub fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "info"

llm:
  base_url: "http://localhost:4010/v1"
  model: "gpt-3.5-turbo"
"#;
