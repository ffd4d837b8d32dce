//! Typed failure taxonomy for the transform pipeline.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by document reads, manifest loads, and output writes.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Input bytes failed UTF-8 decoding.
    #[error("{}: invalid UTF-8 at byte {}", .path.display(), .offset)]
    Encoding { path: PathBuf, offset: usize },

    #[error("reading {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Temp-file create, write, or rename-into-place failure. The path named
    /// is the intended destination, not the temp file.
    #[error("writing {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest {}: {}", .path.display(), .source)]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TransformError {
    /// Classify a read-side io error into the taxonomy.
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type TransformResult<T> = Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_read_errors_by_kind() {
        let path = Path::new("/in/app.module.js");

        let not_found = TransformError::read(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(not_found, TransformError::NotFound(_)));

        let denied = TransformError::read(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, TransformError::PermissionDenied(_)));

        let other = TransformError::read(path, io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(other, TransformError::Read { .. }));
    }

    #[test]
    fn messages_name_the_offending_path() {
        let err = TransformError::NotFound(PathBuf::from("/in/missing.js"));
        assert_eq!(err.to_string(), "input not found: /in/missing.js");

        let err = TransformError::Encoding {
            path: PathBuf::from("/in/binary.js"),
            offset: 12,
        };
        assert_eq!(err.to_string(), "/in/binary.js: invalid UTF-8 at byte 12");
    }
}
