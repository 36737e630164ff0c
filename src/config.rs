use std::time::Duration;

/// Target and timing for the backend health poll.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub health_url: String,
    /// Overall wall-clock budget for the polling loop.
    pub deadline: Duration,
    /// Timeout for a single health request. Generous relative to typical
    /// cold-start wake times, so one slow wake-up attempt is not mistaken
    /// for a dead service.
    pub request_timeout: Duration,
    /// Fixed sleep between attempts.
    pub retry_interval: Duration,
}

/// Target, credentials, and timeout for the login check.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    pub url: String,
    pub email: String,
    pub password: String,
    pub timeout: Duration,
}

/// Target and timeout for the frontend check.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub url: String,
    pub timeout: Duration,
}

/// Everything the run driver needs. Built from CLI arguments at the entry
/// point; there is no other source of configuration.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub backend: BackendConfig,
    pub login: LoginConfig,
    pub frontend: FrontendConfig,
    pub verbose: bool,
}
