use reqwest::StatusCode;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::config::LoginConfig;
use crate::types::{body_snippet, CheckResult};

pub const LOGIN_CHECK: &str = "admin login";

/// Field the backend puts in its login response when it issues a token.
const TOKEN_MARKER: &str = "access_token";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Single-shot login probe: one POST, no retry. A success status without
/// the token marker is still a failure, reported distinctly from a
/// rejected status.
pub fn check_login(
    rt: &Runtime,
    client: &reqwest::Client,
    cfg: &LoginConfig,
    verbose: bool,
) -> CheckResult {
    let payload = LoginRequest {
        email: &cfg.email,
        password: &cfg.password,
    };
    let sent = rt.block_on(async {
        client
            .post(&cfg.url)
            .timeout(cfg.timeout)
            .json(&payload)
            .send()
            .await
    });

    let response = match sent {
        Ok(r) => r,
        Err(e) => return CheckResult::fail(LOGIN_CHECK, format!("request failed: {e}")),
    };

    let status = response.status();
    let body = match rt.block_on(response.text()) {
        Ok(b) => b,
        Err(e) => {
            return CheckResult::fail(LOGIN_CHECK, format!("failed to read response body: {e}"));
        }
    };
    let shown = if verbose {
        body.trim().to_string()
    } else {
        body_snippet(&body)
    };

    if status != StatusCode::OK && status != StatusCode::CREATED {
        return CheckResult::fail(
            LOGIN_CHECK,
            format!("rejected with status {}: {shown}", status.as_u16()),
        );
    }

    if contains_token(&body) {
        CheckResult::pass(
            LOGIN_CHECK,
            format!("token issued (status {})", status.as_u16()),
        )
    } else {
        CheckResult::fail(
            LOGIN_CHECK,
            format!(
                "status {} but no {TOKEN_MARKER} in response: {shown}",
                status.as_u16()
            ),
        )
    }
}

/// True when the body proves a token was issued. JSON bodies must carry the
/// marker as a field, top-level or under `tokens`; for anything that is not
/// JSON, a raw substring probe has to do.
fn contains_token(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            value.get(TOKEN_MARKER).is_some()
                || value
                    .get("tokens")
                    .is_some_and(|t| t.get(TOKEN_MARKER).is_some())
        }
        Err(_) => body.contains(TOKEN_MARKER),
    }
}
