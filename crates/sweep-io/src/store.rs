//! Project storage seam: enumeration, reads, and the commit batch.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::IoError;

/// Injected storage capabilities consumed by the bulk-replace engine.
///
/// The engine never opens files itself; hosts supply an implementation of
/// this trait ([`FsStore`] in production, in-memory or fault-injecting fakes
/// in tests).
pub trait ProjectStore {
    /// Enumerate every file in the project tree, in deterministic order.
    ///
    /// # Errors
    /// Fails when the tree cannot be enumerated at all; individual
    /// unreadable entries are skipped, not fatal.
    fn list_files(&self) -> Result<Vec<PathBuf>, IoError>;

    /// Read up to `limit` leading raw bytes of a file.
    ///
    /// # Errors
    /// Fails when the file cannot be opened or read.
    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, IoError>;

    /// Read a file's full content as strict UTF-8 text.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid UTF-8.
    fn read_text(&self, path: &Path) -> Result<String, IoError>;

    /// Apply a batch of full-content writes sequentially.
    ///
    /// Stops at the first failing write. Files written before the failure
    /// stay written; rollback is the undo mechanism's job, not the commit's.
    ///
    /// # Errors
    /// Fails with the path of the first write that could not be applied.
    fn write_batch(&mut self, writes: &[(PathBuf, String)]) -> Result<(), IoError>;
}

/// Filesystem-backed project store rooted at a directory.
///
/// Enumeration uses gitignore-aware traversal, skips hidden files, and
/// sorts the result so repeated runs over unchanged files report identical
/// statistics. Writes are plain sequential `std::fs::write` calls; external
/// mutation interleaved with a commit batch is a known race, not defended
/// against.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    skip_dirs: Vec<String>,
}

impl FsStore {
    /// Create a store over `root` with the default skip list.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_dirs: vec![
                ".git".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
        }
    }

    /// Replace the directory-name skip list.
    #[must_use]
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    /// Root directory this store enumerates.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn in_skipped_dir(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        for component in parent.components() {
            if let std::path::Component::Normal(name) = component
                && let Some(name) = name.to_str()
                && self.skip_dirs.iter().any(|skip| skip == name)
            {
                return true;
            }
        }
        false
    }
}

impl ProjectStore for FsStore {
    fn list_files(&self) -> Result<Vec<PathBuf>, IoError> {
        // A root that cannot be walked at all is run-fatal; only individual
        // entries below it may be skipped.
        let metadata = fs::metadata(&self.root).map_err(|source| IoError::Walk {
            root: self.root.clone(),
            reason: source.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(IoError::Walk {
                root: self.root.clone(),
                reason: "not a directory".to_string(),
            });
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for result in WalkBuilder::new(&self.root).build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || self.in_skipped_dir(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }
        files.sort();
        debug!(root = %self.root.display(), files = files.len(), "enumerated project tree");
        Ok(files)
    }

    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, IoError> {
        let file = fs::File::open(path).map_err(|source| IoError::read(path, source))?;
        let mut head = Vec::with_capacity(limit);
        file.take(u64::try_from(limit).unwrap_or(u64::MAX))
            .read_to_end(&mut head)
            .map_err(|source| IoError::read(path, source))?;
        Ok(head)
    }

    fn read_text(&self, path: &Path) -> Result<String, IoError> {
        let bytes = fs::read(path).map_err(|source| IoError::read(path, source))?;
        String::from_utf8(bytes).map_err(|_| IoError::Encoding(path.to_path_buf()))
    }

    fn write_batch(&mut self, writes: &[(PathBuf, String)]) -> Result<(), IoError> {
        for (path, content) in writes {
            fs::write(path, content).map_err(|source| IoError::Write {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
