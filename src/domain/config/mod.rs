pub mod bundle_config;
pub mod parse;
pub mod paths;

pub use bundle_config::{BundleConfig, BundleIdentity, InputPaths};
pub use parse::parse_config_content;
