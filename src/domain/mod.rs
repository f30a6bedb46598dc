pub mod bundle;
pub mod config;
pub mod error;
pub mod version;
pub mod yaml;

pub use bundle::{BundleDescriptor, ClusterPermission, OperatorDeployment, OwnedCrd};
pub use config::{BundleConfig, BundleIdentity, InputPaths};
pub use error::AppError;
pub use version::BundleVersion;
