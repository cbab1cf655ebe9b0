//! secretfile - materialize cloud secrets into templated local files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretfile::cli::output;
use secretfile::cli::{execute, Cli};
use secretfile::core::constants::LOG_ENV;
use secretfile::error::{ConfigError, Error, FetchError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretfile=debug")
        } else {
            EnvFilter::new("secretfile=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::Missing) => {
                Some("pass --config \"$(base64 < secrets.json)\" or set SECRETFILE_CONFIG")
            }
            Error::Config(ConfigError::Decode(_)) => {
                Some("encode the JSON with the standard base64 alphabet")
            }
            Error::Config(ConfigError::InvalidTemplate { .. }) => {
                Some("templates need exactly one %s; write %% for a literal percent")
            }
            Error::Fetch(FetchError::NotFound(_)) => Some("check the secret name and AWS region"),
            Error::Fetch(FetchError::Other { message, .. }) if message.contains("credentials") => {
                Some("configure AWS credentials (AWS_PROFILE, AWS_ACCESS_KEY_ID, or an instance role)")
            }
            _ => None,
        };

        let secret = match &e {
            Error::Fetch(f) => f.name(),
            _ => None,
        };
        let path = match &e {
            Error::Write(w) => Some(w.path().display().to_string()),
            _ => None,
        };
        tracing::debug!(stage = e.stage(), ?secret, ?path, "run aborted");

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
