//! Runs the `gemini-vision` binary and checks exit codes and output streams.

use std::{path::Path, process::Output};

use serde_json::json;
use tokio::process::Command;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// A command isolated from the caller's environment and config files.
fn command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gemini-vision"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("RUST_LOG", "info")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_MODEL")
        .env_remove("GEMINI_BASE_URL");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn missing_image_argument_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = command(home.path()).output().await.unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"), "{}", stderr(&output));
}

#[tokio::test]
async fn nonexistent_image_exits_one() {
    let home = tempfile::tempdir().unwrap();
    let output = command(home.path())
        .arg("missing.jpg")
        .env("GEMINI_API_KEY", "test_key")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("Image file 'missing.jpg' not found"),
        "{}",
        stderr(&output)
    );
}

#[tokio::test]
async fn missing_credential_exits_one() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("photo.jpg"), [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();

    let output = command(home.path())
        .arg("photo.jpg")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("GEMINI_API_KEY environment variable must be set"),
        "{}",
        stderr(&output)
    );
}

#[tokio::test]
async fn unsupported_format_exits_one() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("scan.bmp"), b"BM").unwrap();

    let output = command(home.path())
        .arg("scan.bmp")
        .env("GEMINI_API_KEY", "test_key")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Got: .bmp"), "{}", stderr(&output));
}

#[tokio::test]
async fn prints_only_the_answer_to_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "This is a test image showing a landscape." }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("photo.png"), b"\x89PNG\r\n\x1a\n").unwrap();

    let output = command(home.path())
        .arg("photo.png")
        .env("GEMINI_API_KEY", "test_key")
        .env("GEMINI_BASE_URL", server.uri())
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "This is a test image showing a landscape.\n");
    assert!(stderr(&output).contains("Analyzing image: photo.png"));
}
