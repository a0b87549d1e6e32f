/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against a mocked backend
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{ResultBuilder, catalog_json, mock_backend};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn brainstorm() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainstorm"));
    cmd.env_remove("API_URL").env_remove("RUST_LOG");
    cmd
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run_blocking(mut cmd: Command) -> assert_cmd::assert::Assert {
    let output = tokio::task::spawn_blocking(move || cmd.output()).await.unwrap().unwrap();
    output.assert()
}

#[test]
fn test_cli_help() {
    brainstorm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("models"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_cli_version() {
    brainstorm().arg("--version").assert().success().stdout(predicate::str::contains("brainstorm"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_models_lists_catalog() {
    let server = mock_backend(
        catalog_json(&[("openai", "OpenAI"), ("mock", "Mock")], Some("mock")),
        ResultBuilder::new().build(),
    )
    .await;

    let mut cmd = brainstorm();
    cmd.args(["--api-url", &server.uri(), "models"]);
    run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("OpenAI provider"))
        .stdout(predicate::str::contains("* mock"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_models_reads_api_url_from_env() {
    let server =
        mock_backend(catalog_json(&[("claude", "Claude")], None), ResultBuilder::new().build())
            .await;

    let mut cmd = brainstorm();
    cmd.env("API_URL", format!("{}/", server.uri())).arg("models");
    run_blocking(cmd).await.success().stdout(predicate::str::contains("claude"));
}

#[test]
fn test_cli_models_unreachable_backend() {
    brainstorm()
        .args(["--api-url", "http://127.0.0.1:9", "models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers available"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ask_prints_all_stages() {
    let server = mock_backend(
        catalog_json(&[], None),
        ResultBuilder::new().with_final("Bees use polarized light.").build(),
    )
    .await;

    let mut cmd = brainstorm();
    cmd.args(["--api-url", &server.uri(), "ask", "How do bees navigate?"]);
    run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("== Plan (Planner) =="))
        .stdout(predicate::str::contains("== Critique (Critic) =="))
        .stdout(predicate::str::contains("Bees use polarized light."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ask_uses_catalog_current_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json(
            &[("openai", "OpenAI"), ("mock", "Mock")],
            Some("openai"),
        )))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({"question": "q", "provider": "openai"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ResultBuilder::new().build()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = brainstorm();
    cmd.args(["--api-url", &server.uri(), "ask", "q"]);
    run_blocking(cmd).await.success().stdout(predicate::str::contains("== Plan (Planner) =="));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ask_explicit_provider_wins() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({"question": "q", "provider": "gemini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ResultBuilder::new().build()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = brainstorm();
    cmd.args(["--api-url", &server.uri(), "--provider", "gemini", "ask", "q"]);
    run_blocking(cmd).await.success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ask_backend_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("agents crashed"))
        .mount(&server)
        .await;

    let mut cmd = brainstorm();
    cmd.args(["--api-url", &server.uri(), "ask", "anything"]);
    run_blocking(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("HTTP 500"))
        .stderr(predicate::str::contains("agents crashed"));
}

#[test]
fn test_cli_ask_blank_question() {
    brainstorm()
        .args(["--api-url", "http://127.0.0.1:9", "ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question must not be empty"));
}

#[test]
fn test_cli_rejects_bad_api_url() {
    brainstorm()
        .args(["--api-url", "ftp://example.com", "models"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported API URL scheme"));
}
