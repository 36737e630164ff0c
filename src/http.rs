use anyhow::Context;

/// Creates the HTTP client shared by all checks.
/// Returns both the tokio Runtime (needed for subsequent async calls) and
/// the Client; the checks themselves stay synchronous and block on each
/// request in turn.
pub fn create_http_client() -> anyhow::Result<(tokio::runtime::Runtime, reqwest::Client)> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    // Timeouts are set per request; the health poll and the single-shot
    // checks use different budgets.
    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    Ok((rt, client))
}
