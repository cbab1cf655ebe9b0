//! Secret sources.
//!
//! A source resolves a secret name to its plaintext value. The pipeline only
//! sees the [`SecretSource`] trait, so the store can be swapped for a stub in
//! tests.
//!
//! ## Backends
//!
//! - **aws**: AWS Secrets Manager, using the SDK's default credential chain.
//! - **stub**: in-memory map, compiled for tests and with `--features test-store`.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

use crate::core::types::SecretValue;
use crate::error::FetchError;

mod aws;

#[cfg(any(test, feature = "test-store"))]
mod stub;

pub use aws::{AwsOptions, AwsSecretsManager};

#[cfg(any(test, feature = "test-store"))]
pub use stub::{StubEntry, StubStore};

/// Secret store trait.
///
/// Implementations make exactly one attempt per call; retrying is left to
/// the caller, which in this crate never does.
pub trait SecretSource {
    /// Fetch the current plaintext value of `name`.
    ///
    /// # Errors
    ///
    /// - `FetchError::NotFound` if the store has no such secret
    /// - `FetchError::UnsupportedEncoding` if the value has no text form
    /// - `FetchError::Other` for any other failure (network, auth, permission)
    fn fetch(&self, name: &str) -> Result<SecretValue, FetchError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn fetch(&self, name: &str) -> Result<SecretValue, FetchError> {
        (**self).fetch(name)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn fetch(&self, name: &str) -> Result<SecretValue, FetchError> {
        (**self).fetch(name)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
