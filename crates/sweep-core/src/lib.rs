//! sweep-core - bulk find-and-replace engine with single-level undo
//!
//! Applies one search/replace pattern across every matching file in a
//! project tree as a single logical unit, and can reverse exactly that unit
//! once.
//!
//! # Features
//!
//! - **Content-filter selection**: a literal substring picks the
//!   participating files; binary and unreadable files are excluded
//! - **Global regex substitution**: every non-overlapping match replaced,
//!   replacement text inserted literally (no `$1` expansion)
//! - **Atomic-of-intent commit**: all staged writes applied as one batch
//! - **Single-level undo**: pre-mutation snapshots of the last run only
//!
//! # Architecture
//!
//! ```text
//! sweep-core/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # ReplaceError enum (thiserror)
//! ├── types.rs        # ReplaceRequest, ReplaceStats
//! ├── engine.rs       # Substitution: compiled pattern + literal replacement
//! ├── select.rs       # Content-filter file selection
//! ├── undo.rs         # UndoManager, UndoState
//! └── coordinator.rs  # BulkEditor: run_replace / run_undo
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sweep_core::{BulkEditor, ReplaceRequest};
//! use sweep_io::FsStore;
//!
//! let mut editor = BulkEditor::new(FsStore::new("/project"));
//! let stats = editor.run_replace(&ReplaceRequest::new("hello", "world", "earth"))?;
//! println!("{} occurrence(s) in {} file(s)", stats.occurrences_replaced, stats.files_mutated);
//! editor.run_undo()?;
//! ```

mod coordinator;
mod engine;
mod error;
mod select;
mod types;
mod undo;

pub use coordinator::BulkEditor;
pub use engine::Substitution;
pub use error::ReplaceError;
pub use select::select_files;
pub use types::{ReplaceRequest, ReplaceStats};
pub use undo::{UndoManager, UndoState};
