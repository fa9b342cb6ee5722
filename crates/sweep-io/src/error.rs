//! Error types for project storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for project storage operations.
///
/// Each variant represents a specific failure mode in the storage seam.
#[derive(Error, Debug)]
pub enum IoError {
    /// File does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text.
    #[error("not valid UTF-8: {}", .0.display())]
    Encoding(PathBuf),

    /// A file could not be written during a commit batch.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the failing write.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The project tree could not be enumerated at all.
    #[error("failed to enumerate {}: {reason}", .root.display())]
    Walk {
        /// Root the enumeration started from.
        root: PathBuf,
        /// Why the root could not be walked.
        reason: String,
    },
}

impl IoError {
    /// Wrap a read failure, mapping missing files to [`IoError::NotFound`].
    #[must_use]
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound(path.to_path_buf())
        } else {
            IoError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
