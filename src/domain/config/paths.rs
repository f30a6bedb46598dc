use std::path::Path;

/// File name of the optional bundle configuration.
pub const CONFIG_FILE: &str = "bundle.toml";

/// `bundle.toml`, relative to the input root.
pub fn config() -> &'static Path {
    Path::new(CONFIG_FILE)
}
