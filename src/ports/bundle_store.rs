//! Filesystem operations used while composing a bundle.
//!
//! Relative paths resolve against the store's input root; absolute paths are
//! used as given, so an output directory may live anywhere.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for bundle input/output file access.
pub trait BundleStore {
    /// Read a file as UTF-8 text. A missing file is `AppError::NotFound`.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy a file byte-for-byte, replacing the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// List regular files directly inside `dir`, as `dir.join(name)`.
    ///
    /// Order is unspecified. A missing directory is `AppError::NotFound`.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
