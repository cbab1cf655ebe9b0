//! secretfile - write cloud secrets into local files using per-secret templates.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # --check: validate and list planned writes
//! │   ├── fetch         # default run: fetch, render, write
//! │   └── output        # terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # base64 JSON config loader
//!     ├── template      # %s templates
//!     ├── source/       # Secret stores
//!     │   ├── mod       # SecretSource trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── stub      # in-memory store for tests
//!     ├── writer        # file rendering and permissions
//!     └── runner        # sequential fetch → render → write pipeline
//! ```
//!
//! # Example
//!
//! ```no_run
//! use secretfile::core::{config, runner::Runner, source::{AwsOptions, AwsSecretsManager}};
//!
//! # fn main() -> secretfile::error::Result<()> {
//! let tasks = config::load("W3sibmFtZSI6ImFwaS1rZXkiLCJ0YXJnZXQiOiIvdG1wL291dC5lbnYiLCJ0ZW1wbGF0ZSI6IkFQSV9LRVk9JXMifV0=")?;
//! let source = AwsSecretsManager::connect(&AwsOptions::default())?;
//! Runner::new(source).run(&tasks, |task| println!("saved {}", task.target().display()))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
