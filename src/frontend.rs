use reqwest::StatusCode;
use tokio::runtime::Runtime;

use crate::config::FrontendConfig;
use crate::types::CheckResult;

pub const FRONTEND_CHECK: &str = "frontend";

/// Single-shot frontend probe: one GET, success iff status 200. The body is
/// ignored; a static host serving anything at all is what we are after.
pub fn check_frontend(rt: &Runtime, client: &reqwest::Client, cfg: &FrontendConfig) -> CheckResult {
    let sent = rt.block_on(async { client.get(&cfg.url).timeout(cfg.timeout).send().await });

    match sent {
        Ok(response) if response.status() == StatusCode::OK => {
            CheckResult::pass(FRONTEND_CHECK, "live (status 200)")
        }
        Ok(response) => CheckResult::fail(
            FRONTEND_CHECK,
            format!("returned status {}", response.status().as_u16()),
        ),
        Err(e) => CheckResult::fail(FRONTEND_CHECK, format!("unreachable: {e}")),
    }
}
