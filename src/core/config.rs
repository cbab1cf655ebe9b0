//! Configuration loading.
//!
//! The config arrives as base64-encoded JSON in one of two shapes:
//!
//! ```text
//! [ { "name": "api-key", "target": "/etc/app/key.env", "template": "KEY=%s" } ]
//! { "api-key": { "target": "/etc/app/key.env", "template": "KEY=%s" } }
//! ```
//!
//! Both accept an optional `"mode"` (octal string) per entry. The array form
//! keeps its order; the object form is sorted by secret name. Every entry is
//! fully validated here, so a bad config never reaches the secret store.

use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::template::Template;
use crate::core::types::{FileMode, SecretTask};
use crate::error::{ConfigError, Result};

/// One entry of the array form.
#[derive(Debug, Serialize, Deserialize)]
struct ListEntry {
    name: String,
    target: String,
    template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
}

/// One value of the object form; the name is the key.
#[derive(Debug, Deserialize)]
struct MapEntry {
    target: String,
    template: String,
    #[serde(default)]
    mode: Option<String>,
}

/// Decode and validate a base64 config into an ordered task list.
///
/// # Errors
///
/// - `ConfigError::Missing` if `encoded` is empty
/// - `ConfigError::Decode` if it is not standard base64
/// - `ConfigError::Json`, `UnexpectedShape` or `Parse` if the payload does
///   not deserialize into entries
/// - a validation error if any entry is unusable
pub fn load(encoded: &str) -> Result<Vec<SecretTask>> {
    // Line breaks are skipped so wrapped `base64` output is accepted.
    let compact: String = encoded
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect();
    let compact = compact.trim();
    if compact.is_empty() {
        return Err(ConfigError::Missing.into());
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(ConfigError::Decode)?;
    trace!(bytes = bytes.len(), "decoded config");

    parse(&bytes)
}

/// Parse and validate an already-decoded JSON config.
pub fn parse(json: &[u8]) -> Result<Vec<SecretTask>> {
    let document: Value = serde_json::from_slice(json).map_err(ConfigError::Json)?;

    let tasks = match document {
        Value::Array(items) => {
            debug!(entries = items.len(), "parsing list config");
            parse_list(items)?
        }
        Value::Object(map) => {
            debug!(entries = map.len(), "parsing map config");
            parse_map(map)?
        }
        other => return Err(ConfigError::UnexpectedShape(kind(&other)).into()),
    };

    if tasks.is_empty() {
        return Err(ConfigError::Empty.into());
    }
    check_unique_targets(&tasks)?;

    debug!(tasks = tasks.len(), "config loaded");
    Ok(tasks)
}

/// Encode tasks as a base64 array-form config that [`load`] accepts.
pub fn encode(tasks: &[SecretTask]) -> Result<String> {
    let entries: Vec<ListEntry> = tasks
        .iter()
        .map(|task| ListEntry {
            name: task.name().to_string(),
            target: task.target().display().to_string(),
            template: task.template().as_str().to_string(),
            mode: Some(task.mode().to_string()),
        })
        .collect();

    let json = serde_json::to_vec(&entries).map_err(ConfigError::Json)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(json))
}

fn parse_list(items: Vec<Value>) -> Result<Vec<SecretTask>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let entry: ListEntry =
                serde_json::from_value(item).map_err(|source| ConfigError::Parse {
                    entry: format!("#{}", index),
                    source,
                })?;

            if entry.name.is_empty() {
                return Err(ConfigError::InvalidTask {
                    entry: format!("#{}", index),
                    reason: "name must not be empty".to_string(),
                }
                .into());
            }

            build_task(entry.name, entry.target, &entry.template, entry.mode)
        })
        .collect()
}

fn parse_map(map: serde_json::Map<String, Value>) -> Result<Vec<SecretTask>> {
    // BTreeMap fixes the iteration order independently of the JSON map type.
    let sorted: BTreeMap<String, Value> = map.into_iter().collect();

    sorted
        .into_iter()
        .map(|(name, item)| {
            let entry: MapEntry =
                serde_json::from_value(item).map_err(|source| ConfigError::Parse {
                    entry: format!("`{}`", name),
                    source,
                })?;

            if name.is_empty() {
                return Err(ConfigError::InvalidTask {
                    entry: "``".to_string(),
                    reason: "secret name key must not be empty".to_string(),
                }
                .into());
            }

            build_task(name, entry.target, &entry.template, entry.mode)
        })
        .collect()
}

fn build_task(
    name: String,
    target: String,
    template: &str,
    mode: Option<String>,
) -> Result<SecretTask> {
    if target.is_empty() {
        return Err(ConfigError::InvalidTask {
            entry: format!("`{}`", name),
            reason: "target must not be empty".to_string(),
        }
        .into());
    }

    let template = Template::parse(template).map_err(|source| ConfigError::InvalidTemplate {
        name: name.clone(),
        source,
    })?;

    let mode = match mode {
        Some(raw) => FileMode::parse(&raw).map_err(|reason| ConfigError::InvalidMode {
            name: name.clone(),
            mode: raw.clone(),
            reason,
        })?,
        None => FileMode::default(),
    };

    trace!(secret = %name, path = %target, mode = %mode, "validated entry");
    Ok(SecretTask::new(name, target, template, mode))
}

fn check_unique_targets(tasks: &[SecretTask]) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let mut seen: HashMap<PathBuf, &str> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        if let Some(first) = seen.insert(normalize(&cwd, task.target()), task.name()) {
            return Err(ConfigError::DuplicateTarget {
                target: task.target().to_path_buf(),
                first: first.to_string(),
                second: task.name().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Absolute, lexically normalized form of `path`, used to detect aliases
/// such as `out.env` and `./out.env`. Symlinks are not resolved.
fn normalize(cwd: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
