use anyhow::Result;
use console::Style;

use crate::clock::SystemClock;
use crate::config::VerifyConfig;
use crate::progress::{finish_spinner, stage_spinner};
use crate::types::{CheckResult, VerifyOutcome};
use crate::{backend, frontend, http, login};

/// Run the three checks in order and fold their results into the final
/// outcome. Check failures are data, not errors; the only error here is
/// failing to construct the HTTP client before any check could run.
pub fn run_verification(cfg: &VerifyConfig) -> Result<VerifyOutcome> {
    println!("--- starting deployment verification ---");

    let (rt, client) = http::create_http_client()?;
    let clock = SystemClock;

    println!("\n[1/3] Polling backend health at {}", cfg.backend.health_url);
    println!("      (free-tier hosting pauses idle services; expect a 30-60s cold start)");
    let backend = backend::check_backend(&rt, &client, &cfg.backend, &clock, cfg.verbose);

    if !backend.passed {
        let outcome = VerifyOutcome::CriticalFailure;
        print_summary(&[backend], outcome);
        return Ok(outcome);
    }

    println!("\n[2/3] Testing admin login at {}", cfg.login.url);
    let pb = stage_spinner("Posting admin credentials...");
    let login = login::check_login(&rt, &client, &cfg.login, cfg.verbose);
    finish_spinner(&pb, login.passed);
    println!("      {}", login.detail);

    println!("\n[3/3] Checking frontend availability at {}", cfg.frontend.url);
    let pb = stage_spinner("Fetching frontend...");
    let front = frontend::check_frontend(&rt, &client, &cfg.frontend);
    finish_spinner(&pb, front.passed);
    println!("      {}", front.detail);

    let outcome = if login.passed && front.passed {
        VerifyOutcome::Verified
    } else {
        VerifyOutcome::PartialSuccess
    };
    print_summary(&[backend, login, front], outcome);
    Ok(outcome)
}

fn print_summary(results: &[CheckResult], outcome: VerifyOutcome) {
    println!();
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();

    for r in results {
        if r.passed {
            println!("  {} {}: {}", green.apply_to("PASS"), r.name, r.detail);
        } else {
            println!("  {} {}: {}", red.apply_to("FAIL"), r.name, r.detail);
        }
    }

    println!();
    match outcome {
        VerifyOutcome::Verified => {
            println!("{}: deployment is up and functional", green.apply_to(outcome.to_string()));
        }
        VerifyOutcome::PartialSuccess => {
            println!("{}: backend is up, but checks failed", red.apply_to(outcome.to_string()));
        }
        VerifyOutcome::CriticalFailure => {
            println!("{}: backend did not wake up", red.apply_to(outcome.to_string()));
        }
    }
}
