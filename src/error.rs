//! Error types for secretfile.
//!
//! Each pipeline stage has its own error enum; [`Error`] wraps them so
//! callers can propagate with `?` and still match on the failing stage.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a secretfile run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl Error {
    /// Pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Fetch(_) => "fetch",
            Self::Write(_) => "write",
        }
    }
}

/// Errors raised while decoding, parsing, or validating the configuration.
///
/// `Json`, `UnexpectedShape` and `Parse` together cover a payload that does
/// not deserialize into tasks; the remaining variants are validation
/// failures on otherwise well-formed entries.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no configuration given: pass --config <base64-json>")]
    Missing,

    #[error("config is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config must be a JSON array or object, found {0}")]
    UnexpectedShape(&'static str),

    #[error("malformed config entry {entry}: {source}")]
    Parse {
        entry: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config entry {entry}: {reason}")]
    InvalidTask { entry: String, reason: String },

    #[error("invalid template for secret `{name}`: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: TemplateError,
    },

    #[error("invalid file mode `{mode}` for secret `{name}`: {reason}")]
    InvalidMode {
        name: String,
        mode: String,
        reason: String,
    },

    #[error("target `{}` is used by both `{first}` and `{second}`", .target.display())]
    DuplicateTarget {
        target: PathBuf,
        first: String,
        second: String,
    },

    #[error("config contains no secrets")]
    Empty,
}

/// Reasons a template string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template has no `%s` placeholder")]
    NoPlaceholder,

    #[error("template has {0} `%s` placeholders, expected exactly one")]
    MultiplePlaceholders(usize),

    #[error("unsupported directive `%{directive}` at byte {position} (use `%%` for a literal percent)")]
    UnsupportedDirective { directive: char, position: usize },

    #[error("template ends with a lone `%` (use `%%` for a literal percent)")]
    TrailingPercent,
}

/// Errors raised by a [`SecretSource`](crate::core::source::SecretSource).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("the requested secret `{0}` was not found")]
    NotFound(String),

    #[error("secret `{0}` has a binary value, which is not supported")]
    UnsupportedEncoding(String),

    #[error("failed to retrieve secret `{name}`: {message}")]
    Other { name: String, message: String },

    #[error("failed to initialize secret store client: {0}")]
    Connect(String),
}

impl FetchError {
    /// Secret name the failure refers to, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NotFound(name) | Self::UnsupportedEncoding(name) => Some(name),
            Self::Other { name, .. } => Some(name),
            Self::Connect(_) => None,
        }
    }
}

/// Errors raised while writing a rendered secret to its target.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set permissions on `{}`: {source}", .path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write secret to `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Target path the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Permissions { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
