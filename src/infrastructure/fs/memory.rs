//! In-memory File System
//!
//! Backs tests and embedders that keep themes outside the disk. Directories
//! are implied by the files below them, plus any created explicitly.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    writes: usize,
}

/// In-memory FileSystem that counts writes
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<State>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file without counting it as a write
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        self.lock()
            .files
            .insert(path.into(), content.as_ref().to_vec());
    }

    /// Number of `write` calls served so far
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// All stored file paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || is_dir(&state, path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        is_dir(&self.lock(), path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut state = self.lock();
        if state.files.contains_key(path) {
            return Err(FsError::Other(format!(
                "{} exists and is a file",
                path.display()
            )));
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.lock()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.lock();
        state.files.insert(path.to_path_buf(), content.to_vec());
        state.writes += 1;
        Ok(())
    }

    fn file_size(&self, path: &Path) -> FsResult<u64> {
        self.lock()
            .files
            .get(path)
            .map(|content| content.len() as u64)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}

fn is_dir(state: &State, path: &Path) -> bool {
    state.dirs.iter().any(|dir| dir.starts_with(path))
        || state
            .files
            .keys()
            .any(|file| file != path && file.starts_with(path))
}
