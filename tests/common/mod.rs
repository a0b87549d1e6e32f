//! Shared test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builder for `/ask` response bodies
pub struct ResultBuilder {
    body: Value,
}

impl ResultBuilder {
    /// All five stages filled with short placeholder text
    pub fn new() -> Self {
        Self {
            body: json!({
                "plan": "1. Split the question\n2. Gather facts",
                "research": "Found three relevant sources.",
                "analysis": "The sources mostly agree.",
                "critique": "Sample size is small.",
                "final": "Bees navigate using the sun.",
            }),
        }
    }

    pub fn with_field(mut self, key: &str, text: &str) -> Self {
        self.body[key] = json!(text);
        self
    }

    pub fn with_final(self, text: &str) -> Self {
        self.with_field("final", text)
    }

    /// Drop a required stage to simulate a broken backend
    pub fn without(mut self, key: &str) -> Self {
        if let Some(map) = self.body.as_object_mut() {
            map.remove(key);
        }
        self
    }

    pub fn build(self) -> Value {
        self.body
    }
}

/// `/models` body with the given `(id, name)` pairs
pub fn catalog_json(providers: &[(&str, &str)], current: Option<&str>) -> Value {
    let models: Vec<Value> = providers
        .iter()
        .map(|(id, name)| {
            json!({
                "id": id,
                "name": name,
                "description": format!("{} provider", name),
                "speed": "fast",
                "cost": "low",
            })
        })
        .collect();

    match current {
        Some(current) => json!({ "available_models": models, "current": current }),
        None => json!({ "available_models": models }),
    }
}

/// Start a mock backend answering both endpoints
pub async fn mock_backend(catalog: Value, result: Value) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result))
        .mount(&server)
        .await;

    server
}
