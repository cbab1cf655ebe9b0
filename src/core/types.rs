//! Domain types shared by the loader, the sources, and the writer.

use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::constants::{DEFAULT_MODE, MAX_MODE};
use crate::core::template::Template;

/// One configured secret: which secret to fetch, where to write it, and how
/// to format it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretTask {
    name: String,
    target: PathBuf,
    template: Template,
    mode: FileMode,
}

impl SecretTask {
    /// Create a task from already-validated parts.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<PathBuf>,
        template: Template,
        mode: FileMode,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            template,
            mode,
        }
    }

    /// Secret identifier in the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the rendered secret is written to.
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Permission bits applied to the target file.
    pub fn mode(&self) -> FileMode {
        self.mode
    }
}

impl fmt::Display for SecretTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.target.display())
    }
}

/// Unix permission bits for a written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode(u32);

impl FileMode {
    /// Wrap raw permission bits.
    ///
    /// Returns `None` if `bits` exceeds `0o777`.
    pub fn new(bits: u32) -> Option<Self> {
        (bits <= MAX_MODE).then_some(Self(bits))
    }

    /// Parse an octal mode string: `"0644"`, `"644"`, or `"0o644"`.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let digits = s.strip_prefix("0o").unwrap_or(s);
        if digits.is_empty() {
            return Err("mode is empty".to_string());
        }
        if let Some(bad) = digits.chars().find(|c| !('0'..='7').contains(c)) {
            return Err(format!("'{}' is not an octal digit", bad));
        }
        let bits = u32::from_str_radix(digits, 8).map_err(|e| e.to_string())?;
        Self::new(bits).ok_or_else(|| format!("{:o} is above 777", bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self(DEFAULT_MODE)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Plaintext secret content as returned by a store.
///
/// The buffer is wiped on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plaintext.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretValue(<{} bytes redacted>)", self.0.len())
    }
}
