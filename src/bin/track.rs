//! Command-line batch lookup against the carrier tracking service.
//!
//! Runs the same fan-out as the HTTP endpoint without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Look up several numbers (arguments may also be `;`-separated lists)
//! cargo run --bin track -- PN848933136BR "XX1233FF;GGW122"
//!
//! # Print the same JSON the HTTP endpoint returns
//! cargo run --bin track -- --json PN848933136BR
//!
//! # Limit in-flight lookups and stop at the first failure
//! cargo run --bin track -- --concurrency 8 --cancel-on-failure PN848933136BR XX1233FF
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`TRACKING_SOAP_URL`, `LOOKUP_TIMEOUT_SECS`, ...);
//! command-line options take precedence.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use tracking_gateway::api::dto::tracking::TrackingResponse;
use tracking_gateway::api::handlers::tracking::split_tracking_numbers;
use tracking_gateway::application::services::TrackingService;
use tracking_gateway::config::Config;
use tracking_gateway::domain::entities::TrackingRecord;
use tracking_gateway::infrastructure::soap::SoapTrackingClient;
use tracking_gateway::logging;

/// Look up parcel tracking numbers.
#[derive(Parser)]
#[command(name = "track")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracking numbers; each argument may be a `;`-separated list
    #[arg(required = true)]
    numbers: Vec<String>,

    /// Maximum lookups in flight (0 = one per tracking number)
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Abort remaining lookups after the first failure
    #[arg(long)]
    cancel_on_failure: bool,

    /// Carrier SOAP endpoint
    #[arg(long)]
    url: Option<String>,

    /// Per-lookup timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Print the JSON response instead of a summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(concurrency) = self.concurrency {
            config.lookup_concurrency = concurrency;
        }
        if self.cancel_on_failure {
            config.cancel_on_failure = true;
        }
        if let Some(url) = &self.url {
            config.soap_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.lookup_timeout_secs = timeout;
        }
    }

    fn tracking_numbers(&self) -> Vec<String> {
        self.numbers
            .iter()
            .flat_map(|arg| split_tracking_numbers(arg))
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    logging::init_with_writer(&config.log_level, &config.log_format, std::io::stderr);

    let client =
        SoapTrackingClient::from_config(&config).context("Failed to build tracking client")?;
    let service = TrackingService::new(Arc::new(client), config.batch_options());

    match service.run_batch(cli.tracking_numbers()).await {
        Ok(records) if cli.json => {
            let body = serde_json::to_string_pretty(&TrackingResponse::from(records))?;
            println!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        Ok(records) => {
            print_summary(&records);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_summary(records: &[TrackingRecord]) {
    let found = records.iter().filter(|r| r.is_found()).count();

    println!(
        "{} {} of {} found",
        "Tracking:".bold(),
        found.to_string().green(),
        records.len()
    );
    println!();

    for record in records {
        if !record.is_found() {
            println!("  {} {}", record.number.yellow().bold(), record.error.dimmed());
            continue;
        }

        println!("  {} {}", record.number.green().bold(), record.name);
        match &record.event {
            Some(event) => println!(
                "    {} {}  {}",
                event.date.cyan(),
                event.time.cyan(),
                event.description
            ),
            None => println!("    {}", "no events yet".dimmed()),
        }
    }
}

