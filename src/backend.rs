use std::time::Duration;

use reqwest::StatusCode;
use tokio::runtime::Runtime;

use crate::clock::Clock;
use crate::config::BackendConfig;
use crate::progress;
use crate::types::CheckResult;

pub const BACKEND_CHECK: &str = "backend health";

/// Classification of one health-poll round trip.
#[derive(Debug)]
pub enum Attempt {
    /// Status 200; carries the response body.
    Healthy(String),
    /// Reachable, but a non-200 status.
    Status(u16),
    /// The request exceeded its own timeout (cold start still in progress).
    TimedOut,
    /// Could not connect at all (service still deploying, DNS, refused).
    ConnectFailed(String),
    /// Any other transport failure.
    Failed(String),
}

/// Poll until an attempt reports healthy or the deadline elapses.
///
/// The deadline is evaluated only between attempts: an in-flight request is
/// never interrupted, so the loop can overrun the nominal deadline by at
/// most one request timeout plus one retry interval.
pub fn poll_until_healthy<C: Clock>(
    cfg: &BackendConfig,
    clock: &C,
    verbose: bool,
    mut attempt: impl FnMut() -> Attempt,
) -> CheckResult {
    let start = clock.now();
    let mut attempts: u32 = 0;

    while clock.now().duration_since(start) < cfg.deadline {
        attempts += 1;
        let reason = match attempt() {
            Attempt::Healthy(body) => {
                let body = body.trim().to_string();
                println!("      backend healthy after {attempts} attempt(s). Response: {body}");
                return CheckResult::pass(BACKEND_CHECK, body);
            }
            Attempt::Status(code) => format!("status {code}"),
            Attempt::TimedOut => format!(
                "request timed out after {}s (cold start in progress)",
                cfg.request_timeout.as_secs()
            ),
            Attempt::ConnectFailed(cause) => format!("connection error: {cause}"),
            Attempt::Failed(cause) => format!("error: {cause}"),
        };

        if verbose {
            let elapsed = clock.now().duration_since(start).as_secs();
            println!("      [{elapsed}s] {reason}, retrying...");
        } else {
            println!("      {reason}, retrying...");
        }
        clock.sleep(cfg.retry_interval);
    }

    CheckResult::fail(
        BACKEND_CHECK,
        format!(
            "no healthy response within {}s ({} attempts)",
            cfg.deadline.as_secs(),
            attempts
        ),
    )
}

/// One GET against the health endpoint, classified for the polling loop.
/// Transient failures become Attempt variants, never errors.
pub fn health_attempt(
    rt: &Runtime,
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Attempt {
    let response = match rt.block_on(async { client.get(url).timeout(timeout).send().await }) {
        Ok(r) => r,
        Err(e) if e.is_timeout() => return Attempt::TimedOut,
        Err(e) if e.is_connect() => return Attempt::ConnectFailed(root_cause(&e)),
        Err(e) => return Attempt::Failed(root_cause(&e)),
    };

    if response.status() != StatusCode::OK {
        return Attempt::Status(response.status().as_u16());
    }

    match rt.block_on(response.text()) {
        Ok(body) => Attempt::Healthy(body),
        Err(e) if e.is_timeout() => Attempt::TimedOut,
        Err(e) => Attempt::Failed(root_cause(&e)),
    }
}

/// Run the backend availability check against the real endpoint, with a
/// spinner tracking the attempt count.
pub fn check_backend<C: Clock>(
    rt: &Runtime,
    client: &reqwest::Client,
    cfg: &BackendConfig,
    clock: &C,
    verbose: bool,
) -> CheckResult {
    let pb = progress::stage_spinner("Waiting for backend to wake up...");
    let mut attempt_no: u32 = 0;
    let result = poll_until_healthy(cfg, clock, verbose, || {
        attempt_no += 1;
        pb.set_message(format!(
            "Attempt {attempt_no}: waiting for backend to wake up..."
        ));
        health_attempt(rt, client, &cfg.health_url, cfg.request_timeout)
    });
    progress::finish_spinner(&pb, result.passed);
    result
}

/// Innermost cause of a reqwest error, without the URL noise its top-level
/// Display repeats.
fn root_cause(err: &reqwest::Error) -> String {
    let mut cause: &dyn std::error::Error = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
