//! Directory scanning for version constraints

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::parser::traits::Parser;
use crate::parser::types::RequiredVersion;

/// Error type for directory scanning
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("The specified path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("The specified path is a file, expected a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Collect every constraint declared by files directly inside `dir`
///
/// Files are visited in file name order so the result does not depend on
/// the order the filesystem lists them in. Files the parser cannot read or
/// parse are skipped.
pub fn scan_directory(
    dir: &Path,
    parser: &dyn Parser,
) -> Result<Vec<RequiredVersion>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let io_error = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && parser.can_parse(&path.to_string_lossy()) {
            files.push(path);
        }
    }
    files.sort();

    let mut found = Vec::new();
    for path in files {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                continue;
            }
        };

        match parser.parse(&content) {
            Ok(Some(required)) => {
                debug!(
                    "Found required_version {:?} in {}",
                    required.constraint,
                    path.display()
                );
                found.push(required.with_path(path));
            }
            Ok(None) => debug!("No required_version in {}", path.display()),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    Ok(found)
}
