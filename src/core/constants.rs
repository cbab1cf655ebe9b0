//! Constants used throughout secretfile.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the base64 config when `--config` is absent.
pub const CONFIG_ENV: &str = "SECRETFILE_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SECRETFILE_LOG";

/// Environment variable the `test-store` build reads stub secrets from.
pub const STUB_SECRETS_ENV: &str = "SECRETFILE_STUB_SECRETS";

/// Permission bits for written files when an entry sets no `mode`.
pub const DEFAULT_MODE: u32 = 0o600;

/// Highest accepted permission value (no setuid/setgid/sticky bits).
pub const MAX_MODE: u32 = 0o777;

/// Default timeout for a single secret fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
