//! Command-line interface.

pub mod check;
pub mod fetch;
pub mod output;

use clap::Parser;

use crate::core::config;
use crate::core::constants::{CONFIG_ENV, DEFAULT_TIMEOUT_SECS};

/// secretfile - write AWS Secrets Manager secrets into templated files.
#[derive(Parser, Debug)]
#[command(
    name = "secretfile",
    about = "Write AWS Secrets Manager secrets into local files using per-secret templates",
    version,
    after_help = "Config: base64 of [{\"name\":\"api-key\",\"target\":\"/run/app/key.env\",\"template\":\"API_KEY=%s\"}]"
)]
pub struct Cli {
    /// Base64-encoded JSON describing the secrets to retrieve
    #[arg(long, value_name = "BASE64", env = CONFIG_ENV, hide_env_values = true)]
    pub config: Option<String>,

    /// Validate the config and list planned writes without fetching anything
    #[arg(long)]
    pub check: bool,

    /// AWS region (defaults to the standard provider chain)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Timeout for each secret fetch, in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed command line.
///
/// The whole config is loaded and validated before any secret is fetched.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let tasks = config::load(cli.config.as_deref().unwrap_or_default())?;

    if cli.check {
        return check::execute(&tasks);
    }
    fetch::execute(&cli, &tasks)
}
