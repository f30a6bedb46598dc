//! Pure parse/validate for bundle configuration (`bundle.toml`).

use crate::domain::{AppError, BundleConfig};

/// Parse and validate bundle configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BundleConfig, AppError> {
    let config: BundleConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
