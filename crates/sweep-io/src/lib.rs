//! sweep-io - storage seam for the sweep bulk-replace engine
//!
//! The replace engine never touches the filesystem directly; it consumes the
//! injected capabilities defined here.
//!
//! # Features
//!
//! - **Binary classification**: head-byte heuristic to keep binary files out
//!   of bulk text mutations
//! - **Project enumeration**: gitignore-aware traversal with deterministic
//!   ordering
//! - **Batched writes**: sequential commit of staged file contents
//!
//! # Architecture
//!
//! ```text
//! sweep-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum (thiserror)
//! ├── detect.rs   # Binary classification
//! └── store.rs    # ProjectStore trait + FsStore
//! ```

mod detect;
mod error;
mod store;

pub use detect::{CLASSIFY_HEAD_BYTES, is_binary};
pub use error::IoError;
pub use store::{FsStore, ProjectStore};
