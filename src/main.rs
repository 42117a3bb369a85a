mod checks;
mod cli;
mod client;
mod config;
mod progress;
mod report;
mod types;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use client::BackendClient;
use config::TargetConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = TargetConfig::new(&cli.url);
    let client =
        BackendClient::new(config.clone()).context("failed to construct HTTP client")?;

    report::print_banner(&config);

    let results = tokio::select! {
        results = checks::run_all(&client, cli.verbose) => results,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted, aborting remaining checks.");
            return Ok(());
        }
    };

    if cli.json {
        report::print_json(&results);
    } else {
        report::print_summary(&results);
    }

    // Failed checks are reported through the output, not the exit status.
    Ok(())
}
