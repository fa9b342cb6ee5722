//! Request and statistics types for bulk replace operations.

use serde::Serialize;

/// A bulk find-and-replace request.
///
/// All three fields are required and non-empty; [`BulkEditor`] rejects a
/// request missing any field before performing any file I/O.
///
/// [`BulkEditor`]: crate::BulkEditor
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceRequest {
    /// Literal substring a file's full content must contain to participate.
    /// Never interpreted as a pattern.
    pub file_filter: String,
    /// Regular expression replaced globally within each selected file.
    pub search_pattern: String,
    /// Literal replacement text. Not a template: `$1` stays `$1`.
    pub replacement: String,
}

impl ReplaceRequest {
    /// Build a request from the three host-supplied fields.
    pub fn new(
        file_filter: impl Into<String>,
        search_pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            file_filter: file_filter.into(),
            search_pattern: search_pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Aggregate statistics for one bulk replace.
///
/// This is the only externally visible result of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaceStats {
    /// Number of files staged and written. Every selected file counts,
    /// including files where the pattern had zero matches.
    pub files_mutated: usize,
    /// Total occurrences replaced across all files, one per match
    /// regardless of matched length.
    pub occurrences_replaced: usize,
}
