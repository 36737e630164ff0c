use std::time::Duration;

use clap::Parser;

use crate::config::{BackendConfig, FrontendConfig, LoginConfig, VerifyConfig};

// Current TradingPool deployment. These literals exist only here; the rest
// of the crate works off the VerifyConfig built below.
const DEFAULT_HEALTH_URL: &str = "https://tradingpool-backend.onrender.com/health";
const DEFAULT_LOGIN_URL: &str = "https://tradingpool-backend.onrender.com/api/v1/auth/login";
const DEFAULT_FRONTEND_URL: &str = "https://tradingpool-frontend.onrender.com";
const DEFAULT_ADMIN_EMAIL: &str = "sesshomaru@admin.com";
const DEFAULT_ADMIN_PASSWORD: &str = "inyasha";

#[derive(Parser, Debug)]
#[command(
    name = "tradingpool-verify",
    about = "Post-deployment verification for the TradingPool backend and frontend"
)]
pub struct Cli {
    /// Backend health endpoint to poll
    #[arg(long, default_value = DEFAULT_HEALTH_URL)]
    pub health_url: String,

    /// Login endpoint for the admin credential check
    #[arg(long, default_value = DEFAULT_LOGIN_URL)]
    pub login_url: String,

    /// Frontend origin to fetch
    #[arg(long, default_value = DEFAULT_FRONTEND_URL)]
    pub frontend_url: String,

    /// Admin email for the login check
    #[arg(long, default_value = DEFAULT_ADMIN_EMAIL)]
    pub email: String,

    /// Admin password for the login check
    #[arg(long, default_value = DEFAULT_ADMIN_PASSWORD)]
    pub password: String,

    /// Give up polling the backend after this many seconds (build + cold start)
    #[arg(long, default_value_t = 400)]
    pub deadline_secs: u64,

    /// Timeout for a single health request, in seconds
    #[arg(long, default_value_t = 45)]
    pub request_timeout_secs: u64,

    /// Sleep between health polling attempts, in seconds
    #[arg(long, default_value_t = 10)]
    pub retry_interval_secs: u64,

    /// Timeout for the login and frontend checks, in seconds
    #[arg(long, default_value_t = 10)]
    pub check_timeout_secs: u64,

    /// Print full response bodies and per-attempt elapsed time
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> VerifyConfig {
        let check_timeout = Duration::from_secs(self.check_timeout_secs);
        VerifyConfig {
            backend: BackendConfig {
                health_url: self.health_url,
                deadline: Duration::from_secs(self.deadline_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                retry_interval: Duration::from_secs(self.retry_interval_secs),
            },
            login: LoginConfig {
                url: self.login_url,
                email: self.email,
                password: self.password,
                timeout: check_timeout,
            },
            frontend: FrontendConfig {
                url: self.frontend_url,
                timeout: check_timeout,
            },
            verbose: self.verbose,
        }
    }
}
