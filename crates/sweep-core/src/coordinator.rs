//! Bulk mutation coordinator: the two host-facing operations.

use std::path::PathBuf;

use sweep_io::ProjectStore;
use tracing::{debug, info, warn};

use crate::engine::Substitution;
use crate::error::ReplaceError;
use crate::select::select_files;
use crate::types::{ReplaceRequest, ReplaceStats};
use crate::undo::{UndoManager, UndoState};

/// Bulk find-and-replace engine over an injected project store.
///
/// Owns the single-level undo state. Hosts are expected to serialize calls:
/// at most one replace or undo is in flight at a time.
#[derive(Debug)]
pub struct BulkEditor<S> {
    store: S,
    undo: UndoManager,
}

impl<S: ProjectStore> BulkEditor<S> {
    /// Create an editor over `store` with no undoable state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            undo: UndoManager::new(),
        }
    }

    /// Whether the last bulk replace can currently be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.has_pending()
    }

    /// The underlying project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one bulk replace as a single logical unit.
    ///
    /// Enumerates the project tree once, selects the files whose content
    /// contains the literal file filter, stages a substitution result per
    /// selected file alongside a pre-mutation snapshot, commits all staged
    /// writes as one batch, and publishes the snapshots as the new undo
    /// generation. Files added to the tree during the run are not picked up.
    ///
    /// `files_mutated` counts every staged file, including files where the
    /// pattern had zero matches: selected and mutated are the same set.
    ///
    /// # Errors
    /// - [`ReplaceError::MissingField`] when any request field is empty,
    ///   before any I/O.
    /// - [`ReplaceError::Pattern`] when the search pattern does not compile,
    ///   before any file is read.
    /// - [`ReplaceError::Io`] when enumeration or the commit batch fails.
    ///   A failed run publishes no undo state.
    pub fn run_replace(&mut self, request: &ReplaceRequest) -> Result<ReplaceStats, ReplaceError> {
        validate(request)?;
        let substitution = Substitution::compile(&request.search_pattern, &request.replacement)?;

        let all_files = self.store.list_files()?;
        let selected = select_files(&self.store, &all_files, &request.file_filter);
        debug!(
            candidates = all_files.len(),
            selected = selected.len(),
            "selection complete"
        );

        let mut snapshots = UndoState::new();
        let mut writes: Vec<(PathBuf, String)> = Vec::new();
        let mut occurrences = 0usize;

        for path in selected {
            // Files change between selection and staging only in the known
            // unguarded race; one that vanished or turned unreadable drops
            // out of the run like any other per-file read failure.
            let content = match self.store.read_text(&path) {
                Ok(content) => content,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "dropping file from run");
                    continue;
                }
            };
            let (replaced, count) = substitution.apply(&content);
            occurrences += count;
            snapshots.insert(path.clone(), content);
            writes.push((path, replaced));
        }

        let stats = ReplaceStats {
            files_mutated: writes.len(),
            occurrences_replaced: occurrences,
        };

        // This run supersedes the previous undo generation from here on;
        // a failed commit leaves nothing undoable rather than an older
        // generation that predates the partial writes.
        self.undo.clear();
        self.store.write_batch(&writes)?;
        self.undo.publish(snapshots);

        info!(
            files = stats.files_mutated,
            occurrences = stats.occurrences_replaced,
            "bulk replace committed"
        );
        Ok(stats)
    }

    /// Reverse the last bulk replace by restoring its pre-mutation
    /// snapshots as one batch.
    ///
    /// The held generation is cleared before the restore batch runs, so a
    /// failed restore cannot be retried from the same snapshots. That is the
    /// documented sharp edge of single-level undo, preserved as is.
    ///
    /// # Errors
    /// - [`ReplaceError::NothingToUndo`] when no generation is held. Benign;
    ///   hosts report it as information, not a crash.
    /// - [`ReplaceError::Io`] when the restore batch fails.
    pub fn run_undo(&mut self) -> Result<(), ReplaceError> {
        let snapshots = self.undo.take().ok_or(ReplaceError::NothingToUndo)?;
        let writes: Vec<(PathBuf, String)> = snapshots.into_iter().collect();
        self.store.write_batch(&writes)?;
        info!(files = writes.len(), "undo restored previous content");
        Ok(())
    }
}

fn validate(request: &ReplaceRequest) -> Result<(), ReplaceError> {
    if request.file_filter.is_empty() {
        return Err(ReplaceError::MissingField("file_filter"));
    }
    if request.search_pattern.is_empty() {
        return Err(ReplaceError::MissingField("search_pattern"));
    }
    if request.replacement.is_empty() {
        return Err(ReplaceError::MissingField("replacement"));
    }
    Ok(())
}
