//! Bundle configuration loading from the input root.

use std::path::Path;

use crate::domain::config;
use crate::domain::{AppError, BundleConfig};
use crate::ports::BundleStore;

/// Load and parse the bundle configuration.
///
/// An explicit path must exist. Without one, `bundle.toml` is read when
/// present and defaults apply otherwise.
pub fn load_config<S: BundleStore>(
    store: &S,
    explicit: Option<&Path>,
) -> Result<BundleConfig, AppError> {
    let config_path = match explicit {
        Some(path) => path,
        None if store.file_exists(config::paths::config()) => config::paths::config(),
        None => {
            log::debug!("No {} found, using defaults", config::paths::CONFIG_FILE);
            return Ok(BundleConfig::default());
        }
    };

    log::debug!("Loading configuration from {}", config_path.display());
    let content = store.read_file(config_path)?;
    config::parse::parse_config_content(&content)
}
