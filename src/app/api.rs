//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemBundleStore, SystemClock};
use crate::app::{AppContext, commands, config};
use crate::ports::Clock;

pub use crate::app::commands::compose::{ComposeOutcome, ComposeRequest};
pub use crate::domain::{AppError, BundleConfig, BundleVersion};

/// Load bundle configuration from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<BundleConfig, AppError> {
    load_config_at(std::env::current_dir()?, explicit)
}

/// Load bundle configuration with inputs rooted at `root`.
pub fn load_config_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
) -> Result<BundleConfig, AppError> {
    let store = FilesystemBundleStore::new(root.into());
    config::load_config(&store, explicit)
}

/// Compose a bundle from the manifests in the current directory.
pub fn compose(
    config: &BundleConfig,
    request: &ComposeRequest,
) -> Result<ComposeOutcome, AppError> {
    compose_at(std::env::current_dir()?, config, request)
}

/// Compose a bundle from the manifests under `root`.
pub fn compose_at(
    root: impl Into<PathBuf>,
    config: &BundleConfig,
    request: &ComposeRequest,
) -> Result<ComposeOutcome, AppError> {
    compose_with_clock(root, SystemClock, config, request)
}

/// Compose a bundle under `root`, reading `createdAt` from `clock`.
pub fn compose_with_clock<C: Clock>(
    root: impl Into<PathBuf>,
    clock: C,
    config: &BundleConfig,
    request: &ComposeRequest,
) -> Result<ComposeOutcome, AppError> {
    let ctx = AppContext::new(FilesystemBundleStore::new(root.into()), clock);
    commands::compose::execute(&ctx, config, request)
}
