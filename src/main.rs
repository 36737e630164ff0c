mod backend;
mod cli;
mod clock;
mod config;
mod frontend;
mod http;
mod login;
mod progress;
mod types;
mod verify;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let cfg = cli.into_config();

    match verify::run_verification(&cfg) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
