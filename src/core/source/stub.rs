//! In-memory secret source for testing.
//!
//! NOT a real store: values come from a map supplied up front. Built for
//! unit tests and, with `--features test-store`, for the binary, where the
//! map is read from `SECRETFILE_STUB_SECRETS`:
//!
//! ```text
//! {"api-key": "secret123", "blob": {"binary": true}, "flaky": {"error": "throttled"}}
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::trace;

use super::SecretSource;
use crate::core::constants::STUB_SECRETS_ENV;
use crate::core::types::SecretValue;
use crate::error::FetchError;

/// What the stub returns for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubEntry {
    /// A plaintext value.
    Text(String),
    /// A value stored as binary; fetching it fails with `UnsupportedEncoding`.
    Binary,
    /// A store-side failure with the given message.
    Failure(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Binary { binary: bool },
    Failure { error: String },
}

/// Stub source backed by a fixed map. Records every name it is asked for.
#[derive(Debug, Default)]
pub struct StubStore {
    entries: BTreeMap<String, StubEntry>,
    calls: RefCell<Vec<String>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plaintext secret.
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.entries
            .insert(name.to_string(), StubEntry::Text(value.to_string()));
        self
    }

    /// Add a secret that only has a binary value.
    pub fn with_binary(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), StubEntry::Binary);
        self
    }

    /// Add a secret whose fetch fails with `FetchError::Other`.
    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.entries
            .insert(name.to_string(), StubEntry::Failure(message.to_string()));
        self
    }

    /// Build a stub from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_str(json)
            .map_err(|e| FetchError::Connect(format!("invalid stub secrets: {}", e)))?;

        let mut store = Self::new();
        for (name, entry) in raw {
            let entry = match entry {
                RawEntry::Text(value) => StubEntry::Text(value),
                RawEntry::Binary { binary: true } => StubEntry::Binary,
                RawEntry::Binary { binary: false } => {
                    return Err(FetchError::Connect(format!(
                        "invalid stub secret `{}`: binary must be true",
                        name
                    )))
                }
                RawEntry::Failure { error } => StubEntry::Failure(error),
            };
            store.entries.insert(name, entry);
        }
        Ok(store)
    }

    /// Build a stub from `SECRETFILE_STUB_SECRETS`; unset means an empty store.
    pub fn from_env() -> Result<Self, FetchError> {
        match std::env::var(STUB_SECRETS_ENV) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Ok(Self::new()),
        }
    }

    /// Names fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SecretSource for StubStore {
    fn fetch(&self, name: &str) -> Result<SecretValue, FetchError> {
        trace!(secret = name, "stub fetch");
        self.calls.borrow_mut().push(name.to_string());

        match self.entries.get(name) {
            Some(StubEntry::Text(value)) => Ok(SecretValue::new(value.as_str())),
            Some(StubEntry::Binary) => Err(FetchError::UnsupportedEncoding(name.to_string())),
            Some(StubEntry::Failure(message)) => Err(FetchError::Other {
                name: name.to_string(),
                message: message.clone(),
            }),
            None => Err(FetchError::NotFound(name.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
