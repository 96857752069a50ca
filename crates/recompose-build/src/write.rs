use std::path::{Path, PathBuf};

use crate::compose::ComposeFile;

/// Render the compose file and write it to `path` in one go.
///
/// An existing file is truncated and replaced. Missing parent directories
/// are not created.
pub fn write_compose(path: &Path, compose: &ComposeFile) -> Result<(), WriteError> {
    let yaml = compose
        .to_yaml()
        .map_err(|e| WriteError::Render { source: e })?;

    std::fs::write(path, yaml).map_err(|e| WriteError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        services = compose.services.len(),
        "compose file written"
    );
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to render compose file: {source}")]
    Render { source: serde_yaml::Error },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
