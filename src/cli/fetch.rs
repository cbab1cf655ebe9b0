//! Fetch every configured secret and write it to its target.

use tracing::debug;

use crate::cli::{output, Cli};
use crate::core::runner::Runner;
use crate::core::source::SecretSource;
use crate::core::types::SecretTask;
use crate::error::Result;

/// Run all tasks against the configured store.
pub fn execute(cli: &Cli, tasks: &[SecretTask]) -> Result<()> {
    let source = open_source(cli)?;
    debug!(source = source.name(), tasks = tasks.len(), "starting run");

    Runner::new(source).run(tasks, |task| {
        output::success(&format!(
            "secret value saved to {}",
            output::path(&task.target().display().to_string())
        ));
    })?;
    Ok(())
}

#[cfg(not(feature = "test-store"))]
fn open_source(cli: &Cli) -> Result<Box<dyn SecretSource>> {
    use crate::core::source::{AwsOptions, AwsSecretsManager};

    let options = AwsOptions {
        region: cli.region.clone(),
        timeout: std::time::Duration::from_secs(cli.timeout),
    };
    Ok(Box::new(AwsSecretsManager::connect(&options)?))
}

#[cfg(feature = "test-store")]
fn open_source(_cli: &Cli) -> Result<Box<dyn SecretSource>> {
    use crate::core::source::StubStore;

    Ok(Box::new(StubStore::from_env()?))
}
