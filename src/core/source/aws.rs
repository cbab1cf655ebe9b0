//! AWS Secrets Manager source.
//!
//! Credentials and region come from the default provider chain
//! (environment, shared config/credentials files, instance or task role)
//! unless a region override is given.
//!
//! The SDK is async; this source owns a current-thread tokio runtime and
//! blocks on each request so the rest of the crate stays synchronous.

use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::SecretSource;
use crate::core::constants::DEFAULT_TIMEOUT_SECS;
use crate::core::types::SecretValue;
use crate::error::FetchError;

/// Client settings that override the ambient AWS configuration.
#[derive(Debug, Clone)]
pub struct AwsOptions {
    /// Region override; `None` uses the provider chain.
    pub region: Option<String>,
    /// Per-operation timeout, covering all attempts of one request.
    pub timeout: Duration,
}

impl Default for AwsOptions {
    fn default() -> Self {
        Self {
            region: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// AWS Secrets Manager backend.
pub struct AwsSecretsManager {
    runtime: Runtime,
    client: Client,
}

impl AwsSecretsManager {
    /// Load the AWS configuration and build a client.
    ///
    /// No request is sent; credentials are only resolved on the first fetch.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Connect` if the async runtime cannot be created.
    pub fn connect(options: &AwsOptions) -> Result<Self, FetchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FetchError::Connect(format!("failed to create runtime: {}", e)))?;

        let client = runtime.block_on(async {
            let timeouts = TimeoutConfig::builder()
                .operation_timeout(options.timeout)
                .build();

            let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(timeouts);
            if let Some(region) = &options.region {
                loader = loader.region(Region::new(region.clone()));
            }

            let config = loader.load().await;
            debug!(
                region = ?config.region(),
                timeout_secs = options.timeout.as_secs(),
                "loaded AWS config"
            );
            Client::new(&config)
        });

        Ok(Self { runtime, client })
    }
}

impl SecretSource for AwsSecretsManager {
    fn fetch(&self, name: &str) -> Result<SecretValue, FetchError> {
        trace!(secret = name, "requesting secret value");

        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(name).send())
            .map_err(|err| {
                let not_found = err
                    .as_service_error()
                    .map(|e| e.is_resource_not_found_exception())
                    .unwrap_or(false);

                if not_found {
                    FetchError::NotFound(name.to_string())
                } else {
                    FetchError::Other {
                        name: name.to_string(),
                        message: DisplayErrorContext(&err).to_string(),
                    }
                }
            })?;

        match output.secret_string() {
            Some(value) => {
                trace!(secret = name, len = value.len(), "received secret string");
                Ok(SecretValue::new(value))
            }
            None => {
                debug!(
                    secret = name,
                    binary = output.secret_binary().is_some(),
                    "secret has no string value"
                );
                Err(FetchError::UnsupportedEncoding(name.to_string()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }
}
