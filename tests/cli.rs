use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SIGN_PATH: &str = "/system/file-management/sign-upload-url-suffix-size";

fn cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signed-upload").expect("binary should build");
    cmd.env_remove("SIGNED_UPLOAD_URL")
        .env_remove("SIGNED_UPLOAD_TOKEN")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn check_accepts_default_document_types() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "report.PDF", "slides.pptx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.PDF"))
        .stdout(predicate::str::contains("yes"));
}

#[test]
fn check_rejects_unlisted_picture() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--picture", "--accept", "webp", "photo.png"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no"))
        .stderr(predicate::str::contains("photo.png"));
}

#[test]
fn accept_prints_attribute_and_help() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["accept", "--accept", "png,.jpg,image/*", "--max-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accept: .png,.jpg,image/*"))
        .stdout(predicate::str::contains("no larger than 2MB"));
}

#[test]
fn base64_prints_data_url() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("hello.txt");
    std::fs::write(&file, "hello").unwrap();

    cmd(&dir)
        .arg("base64")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("data:text/plain;base64,aGVsbG8="));
}

#[test]
fn base64_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("base64")
        .arg(dir.path().join("missing.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File I/O error"));
}

#[test]
fn upload_without_url_reports_hint() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.pdf");
    std::fs::write(&file, "%PDF").unwrap();

    cmd(&dir)
        .arg("upload")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"))
        .stderr(predicate::str::contains("config set --url"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args([
            "config",
            "set",
            "--url",
            "https://api.example.test/",
            "--upload-type",
            "contract",
            "--accept",
            "pdf,docx",
        ])
        .assert()
        .success();

    assert!(dir.path().join("config.toml").exists());

    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.test"))
        .stdout(predicate::str::contains("contract"))
        .stdout(predicate::str::contains("pdf,docx"));
}

#[test]
fn config_set_requires_a_value() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_signs_and_puts_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SIGN_PATH))
        .and(query_param("suffix", "pdf"))
        .and(query_param("type", "contract"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "data": {
                "signUploadUrl": format!("{}/bucket/c.pdf", server.uri()),
                "filePath": "contract/c.pdf",
                "fileName": "c.pdf",
                "type": "contract"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/bucket/c.pdf"))
        .and(header("content-type", "application/pdf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("c.pdf");
    std::fs::write(&file, "%PDF-1.7").unwrap();
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        cmd(&dir)
            .args(["--url", uri.as_str(), "--token", "tok", "upload", "--type", "contract", "--json"])
            .arg(&file)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"filePath\": \"contract/c.pdf\""))
        .stdout(predicate::str::contains("Upload succeeded").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_rejected_file_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tool.exe");
    std::fs::write(&file, "MZ").unwrap();
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        cmd(&dir)
            .args(["--url", uri.as_str(), "upload", "--accept", "pdf"])
            .arg(&file)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .failure()
        .stdout(predicate::str::contains("File format must be one of pdf"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_accept_list_with_spaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SIGN_PATH))
        .and(query_param("suffix", "docx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "data": {
                "signUploadUrl": format!("{}/bucket/r.docx", server.uri()),
                "filePath": "default/r.docx",
                "fileName": "r.docx",
                "type": "default"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/bucket/r.docx"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("r.docx");
    std::fs::write(&file, "PK").unwrap();
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        cmd(&dir)
            .args(["--url", uri.as_str(), "upload", "--accept", "pdf, docx", "--json"])
            .arg(&file)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filePath\": \"default/r.docx\""));
}
