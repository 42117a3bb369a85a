use clap::Parser;

use crate::config::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "airwatch-smoke",
    about = "Smoke-test the Air Watch backend air-quality endpoints"
)]
pub struct Cli {
    /// Base URL of the backend under test
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Print each check's raw response body
    #[arg(long)]
    pub verbose: bool,

    /// Emit check results as JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,
}
