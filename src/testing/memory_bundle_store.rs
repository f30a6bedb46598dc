//! Test double for `BundleStore`.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::BundleStore;

/// In-memory implementation of `BundleStore` for unit tests.
///
/// `list_files` returns entries in hash order so callers cannot rely on it.
#[derive(Clone, Debug, Default)]
pub struct MemoryBundleStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryBundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: impl Into<String>) -> Self {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.into());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.dirs.lock().unwrap().insert(PathBuf::from(path));
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl BundleStore for MemoryBundleStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| AppError::NotFound { path: path.display().to_string() })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let content = self.read_file(from)?;
        self.write_file(to, &content)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files: Vec<PathBuf> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect();

        if files.is_empty() && !self.has_dir(dir) {
            return Err(AppError::NotFound { path: dir.display().to_string() });
        }
        Ok(files)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}
