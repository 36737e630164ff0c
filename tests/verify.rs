use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build the command with every target pointed at the mock server and
/// timing small enough for tests.
fn verify_cmd(server_uri: &str, deadline_secs: u64, retry_interval_secs: u64) -> Command {
    let mut cmd = Command::cargo_bin("tradingpool-verify").expect("binary not built");
    cmd.args([
        "--health-url",
        &format!("{server_uri}/health"),
        "--login-url",
        &format!("{server_uri}/api/v1/auth/login"),
        "--frontend-url",
        server_uri,
        "--email",
        "admin@example.com",
        "--password",
        "hunter2",
        "--deadline-secs",
        &deadline_secs.to_string(),
        "--request-timeout-secs",
        "5",
        "--retry-interval-secs",
        &retry_interval_secs.to_string(),
        "--check-timeout-secs",
        "5",
    ]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn healthy_backend_login_and_frontend_verify_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_partial_json(json!({"email": "admin@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": {"email": "admin@example.com"},
            "tokens": {"access_token": "jwt", "refresh_token": "jwt2"},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        verify_cmd(&uri, 30, 0)
            .assert()
            .success()
            .stdout(predicate::str::contains("VERIFIED"))
            .stdout(predicate::str::contains(r#"{"status":"ok"}"#));
    })
    .await
    .expect("verification run panicked");

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn dead_backend_is_critical_failure_and_skips_other_checks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    // When the backend never wakes up, login and frontend must not run.
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        verify_cmd(&uri, 1, 1)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("CRITICAL FAILURE"))
            .stdout(predicate::str::contains("status 503"))
            .stdout(predicate::str::contains("[2/3]").not())
            .stdout(predicate::str::contains("[3/3]").not());
    })
    .await
    .expect("verification run panicked");

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_token_after_slow_wakeup_is_partial_success() {
    let server = MockServer::start().await;

    // Three transient failures before the backend comes up. Mount order
    // matters: the bounded mock is consumed first, then the healthy one.
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(3)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;
    // Login responds 200 but never issued a token.
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"email": "admin@example.com"},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        verify_cmd(&uri, 30, 0)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("backend healthy after 4 attempt(s)"))
            .stdout(predicate::str::contains("no access_token"))
            .stdout(predicate::str::contains("PARTIAL SUCCESS"));
    })
    .await
    .expect("verification run panicked");

    server.verify().await;
}
