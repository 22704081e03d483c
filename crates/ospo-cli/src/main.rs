//! ospo - Open Source Program Office request portal CLI
//!
//! # Examples
//!
//! ```bash
//! # Dashboard against the built-in demo data
//! ospo --demo dashboard --pretty
//!
//! # Ask approval for a pull request
//! ospo request submit pull-request --title "Fix login race" \
//!     --project-name "Authentication Service" \
//!     --url https://github.com/acme/auth/pull/42
//!
//! # Pending and in-review requests, second page
//! ospo request open --page 2
//! ```

use ospo_cli::session::{self, Overrides};
use ospo_cli::{App, Cli, CliResult, Outcome, logger};

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use log::{error, info};
use ospo_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(outcome) => print_outcome(&outcome, pretty),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Outcome> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ospo v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let overrides = Overrides {
        server: cli.server,
        user_id: cli.user_id,
        transport: cli.transport,
        demo: cli.demo,
    };

    let api = session::build_api(&config.api, &overrides);
    let user = session::session_user(&config.user, &overrides)?;
    let app = App::new(api, user, session::validation_limits(&config.validation));

    app.run(cli.command, Utc::now()).await
}

fn print_outcome(outcome: &Outcome, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(&outcome.output)
    } else {
        serde_json::to_string(&outcome.output)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}
