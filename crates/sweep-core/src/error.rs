//! Error taxonomy for bulk replace and undo.

use sweep_io::IoError;
use thiserror::Error;

/// Error types for the two host-facing operations.
///
/// Validation and pattern errors are fatal to a single run and surface
/// before any mutation; per-file read failures never appear here (affected
/// files are excluded from the run instead).
#[derive(Error, Debug)]
pub enum ReplaceError {
    /// A required request field was empty. Reported before any file I/O.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The search pattern is not a valid regular expression. No files were
    /// read or written.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Project enumeration or a commit batch failed. Run-fatal; no partial
    /// rollback is attempted.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Undo was requested with no prior bulk replace to reverse. Benign.
    #[error("no prior bulk replace to undo")]
    NothingToUndo,
}
