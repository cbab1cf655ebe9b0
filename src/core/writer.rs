//! Rendering and writing secret files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::core::types::{FileMode, SecretTask, SecretValue};
use crate::error::WriteError;

/// Render `value` through the task's template and write it to the target.
pub fn write_task(task: &SecretTask, value: &SecretValue) -> Result<(), WriteError> {
    let content = task.template().render(value);
    write_file(task.target(), content.as_bytes(), task.mode())
}

/// Create or truncate `path`, restrict it to `mode`, then write `content`.
///
/// Permissions are applied to the open handle before any byte is written
/// and regardless of whether the file existed, so the final mode is exactly
/// `mode` independent of umask. Parent directories are not created.
pub fn write_file(path: &Path, content: &[u8], mode: FileMode) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.bits());
    }

    let mut file = options.open(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(mode.bits()))
            .map_err(|source| WriteError::Permissions {
                path: path.to_path_buf(),
                source,
            })?;
    }

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = content.len(), mode = %mode, "wrote secret file");
    Ok(())
}
