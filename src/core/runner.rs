//! The fetch → render → write pipeline.
//!
//! Tasks run one at a time in config order. The first failure stops the
//! run; files already written by earlier tasks are left in place.

use tracing::debug;

use crate::core::source::SecretSource;
use crate::core::types::SecretTask;
use crate::core::writer;
use crate::error::Result;

/// Drives tasks against a secret source.
pub struct Runner<S> {
    source: S,
}

impl<S: SecretSource> Runner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Process a single task: fetch its secret, then render and write it.
    pub fn process(&self, task: &SecretTask) -> Result<()> {
        debug!(
            secret = task.name(),
            path = %task.target().display(),
            source = self.source.name(),
            "processing secret"
        );

        let value = self.source.fetch(task.name())?;
        writer::write_task(task, &value)?;
        Ok(())
    }

    /// Process every task in order, calling `on_saved` after each write.
    ///
    /// Returns the number of files written.
    pub fn run<F>(&self, tasks: &[SecretTask], mut on_saved: F) -> Result<usize>
    where
        F: FnMut(&SecretTask),
    {
        for task in tasks {
            self.process(task)?;
            on_saved(task);
        }

        debug!(written = tasks.len(), "all secrets written");
        Ok(tasks.len())
    }
}
