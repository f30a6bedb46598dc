use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::BundleStore;

/// Filesystem-based bundle store rooted at the input directory.
#[derive(Debug, Clone)]
pub struct FilesystemBundleStore {
    root: PathBuf,
}

impl FilesystemBundleStore {
    /// Create a bundle store for the given input root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl BundleStore for FilesystemBundleStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path)).map_err(|err| not_found_or(path, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve_path(path), content)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::copy(self.resolve_path(from), self.resolve_path(to))
            .map_err(|err| not_found_or(from, err))?;
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries =
            fs::read_dir(self.resolve_path(dir)).map_err(|err| not_found_or(dir, err))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.path().is_file() {
                files.push(dir.join(entry.file_name()));
            }
        }
        Ok(files)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve_path(path))?;
        Ok(())
    }
}

fn not_found_or(path: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::NotFound { path: path.display().to_string() }
    } else {
        AppError::Io(err)
    }
}
