//! Exit status and log output of the `notion-insert` binary.

use serde_json::json;
use std::io::Write;
use std::process::Output;
use tempfile::NamedTempFile;
use tokio::process::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn notion_insert(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notion-insert"))
        .args(args)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .env_remove("NOTION_INSERT_FILE_NAME")
        .env_remove("NOTION_INSERT_TOKEN")
        .env_remove("NOTION_INSERT_DATABASE_ID")
        .env_remove("NOTION_INSERT_API_URL")
        .env_remove("NOTION_INSERT_NOTION_VERSION")
        .output()
        .await
        .expect("run notion-insert")
}

fn error_lines(stderr: &str) -> Vec<&str> {
    stderr.lines().filter(|line| line.contains("ERROR")).collect()
}

#[tokio::test]
async fn missing_file_exits_non_zero_with_one_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let output = notion_insert(&[
        "--file-name",
        missing.to_str().unwrap(),
        "--token",
        "secret",
        "--database-id",
        "db",
        "--api-url",
        "http://127.0.0.1:9/v1/pages",
    ])
    .await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "stderr: {stderr}");
    assert_eq!(output.status.code(), Some(1));

    let errors = error_lines(&stderr);
    assert_eq!(errors.len(), 1, "stderr: {stderr}");
    assert!(errors[0].contains("failed to open file"), "stderr: {stderr}");
}

#[tokio::test]
async fn non_success_responses_still_exit_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "status": 400
        })))
        .expect(2)
        .mount(&server)
        .await;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Task A\nTask B\n").unwrap();
    let api_url = format!("{}/v1/pages", server.uri());

    let output = notion_insert(&[
        "--file-name",
        file.path().to_str().unwrap(),
        "--token",
        "secret",
        "--database-id",
        "db",
        "--api-url",
        &api_url,
    ])
    .await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(
        stderr.contains("Task A: response Status: 400 Bad Request"),
        "stderr: {stderr}"
    );
    assert!(
        stderr.contains("Task B: response Status: 400 Bad Request"),
        "stderr: {stderr}"
    );
    assert!(error_lines(&stderr).is_empty(), "stderr: {stderr}");
}
