//! Config check: list what a run would write, without touching the store.

use crate::cli::output;
use crate::core::types::SecretTask;
use crate::error::Result;

/// Print the planned tasks.
pub fn execute(tasks: &[SecretTask]) -> Result<()> {
    output::header("Planned secrets");
    output::rule();
    for task in tasks {
        output::list_item(&format!(
            "{} → {}  {}",
            output::key(task.name()),
            output::path(&task.target().display().to_string()),
            output::dim(&format!("mode {}", task.mode()))
        ));
    }
    println!();
    output::success(&format!(
        "config is valid ({} secret{})",
        tasks.len(),
        if tasks.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}
