//! File selection by literal content filter.

use std::path::PathBuf;

use sweep_io::{CLASSIFY_HEAD_BYTES, ProjectStore, is_binary};
use tracing::warn;

/// Select the candidates whose text content contains `file_filter`.
///
/// Order-preserving relative to `candidates`. Per candidate: files whose
/// leading bytes classify as binary are skipped, and files whose head or
/// full read fails (missing, unreadable, not valid UTF-8) are excluded
/// without aborting the run. The filter is a literal substring, never a
/// pattern, unlike the search pattern applied later.
///
/// An empty result is valid; the coordinator then reports zero mutations.
pub fn select_files<S: ProjectStore>(
    store: &S,
    candidates: &[PathBuf],
    file_filter: &str,
) -> Vec<PathBuf> {
    let mut selected = Vec::new();
    for path in candidates {
        let head = match store.read_head(path, CLASSIFY_HEAD_BYTES) {
            Ok(head) => head,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        if is_binary(&head) {
            continue;
        }
        let content = match store.read_text(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping undecodable file");
                continue;
            }
        };
        if content.contains(file_filter) {
            selected.push(path.clone());
        }
    }
    selected
}
