//! Output templates.
//!
//! A template is a format string with exactly one `%s` placeholder. `%%`
//! stands for a literal `%`; every other `%` sequence is rejected so that a
//! template is fully checked when the config is loaded, not when a secret is
//! already in hand.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::types::SecretValue;
use crate::error::TemplateError;

/// A validated template, split around its placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    prefix: String,
    suffix: String,
}

impl Template {
    /// Parse and validate `raw`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the placeholder count is not exactly one or
    /// the string contains an unsupported `%` directive.
    pub fn parse(raw: &str) -> std::result::Result<Self, TemplateError> {
        let mut prefix = String::with_capacity(raw.len());
        let mut suffix = String::new();
        let mut placeholders = 0usize;

        let mut chars = raw.char_indices();
        while let Some((position, ch)) = chars.next() {
            let out = if placeholders == 0 {
                &mut prefix
            } else {
                &mut suffix
            };

            if ch != '%' {
                out.push(ch);
                continue;
            }

            match chars.next() {
                Some((_, 's')) => placeholders += 1,
                Some((_, '%')) => out.push('%'),
                Some((_, directive)) => {
                    return Err(TemplateError::UnsupportedDirective {
                        directive,
                        position,
                    })
                }
                None => return Err(TemplateError::TrailingPercent),
            }
        }

        match placeholders {
            0 => Err(TemplateError::NoPlaceholder),
            1 => Ok(Self {
                raw: raw.to_string(),
                prefix,
                suffix,
            }),
            n => Err(TemplateError::MultiplePlaceholders(n)),
        }
    }

    /// The template as written in the config.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `value` at the placeholder.
    ///
    /// The value is copied verbatim; `%` inside it is never interpreted.
    pub fn render(&self, value: &SecretValue) -> Zeroizing<String> {
        let mut out =
            Zeroizing::new(String::with_capacity(self.prefix.len() + value.len() + self.suffix.len()));
        out.push_str(&self.prefix);
        out.push_str(value.expose());
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Template").field(&self.raw).finish()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
