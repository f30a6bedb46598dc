//! Bundle configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::version::DEFAULT_VERSION_BASE;

const DEFAULT_BUNDLE_NAME: &str = "managed-velero-operator";

/// Configuration for bundle composition loaded from `bundle.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    /// Bundle identity.
    #[serde(default)]
    pub bundle: BundleIdentity,
    /// Input document locations.
    #[serde(default)]
    pub inputs: InputPaths,
}

impl BundleConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.bundle.validate()?;
        self.inputs.validate()?;
        Ok(())
    }
}

/// Names stamped into the generated ClusterServiceVersion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleIdentity {
    /// Operator name used as CSV name prefix and output file prefix.
    #[serde(default = "default_bundle_name")]
    pub name: String,
    /// Service account bound to the cluster permissions.
    #[serde(default = "default_bundle_name")]
    pub service_account: String,
    /// Version base prepended to the commit count.
    #[serde(default = "default_version_base")]
    pub version_base: String,
}

impl Default for BundleIdentity {
    fn default() -> Self {
        Self {
            name: default_bundle_name(),
            service_account: default_bundle_name(),
            version_base: default_version_base(),
        }
    }
}

impl BundleIdentity {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("bundle.name", &self.name)?;
        require_non_empty("bundle.service_account", &self.service_account)?;
        require_non_empty("bundle.version_base", &self.version_base)?;
        Ok(())
    }
}

/// Input locations, relative to the input root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputPaths {
    /// ClusterServiceVersion template.
    #[serde(default = "default_template")]
    pub template: String,
    /// Directory scanned for CRD manifests.
    #[serde(default = "default_crd_dir")]
    pub crd_dir: String,
    /// File name suffix selecting CRD manifests inside `crd_dir`.
    #[serde(default = "default_crd_suffix")]
    pub crd_suffix: String,
    /// ClusterRole whose rules become the CSV cluster permissions.
    #[serde(default = "default_cluster_role")]
    pub cluster_role: String,
    /// Operator Deployment manifest.
    #[serde(default = "default_operator")]
    pub operator: String,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            template: default_template(),
            crd_dir: default_crd_dir(),
            crd_suffix: default_crd_suffix(),
            cluster_role: default_cluster_role(),
            operator: default_operator(),
        }
    }
}

impl InputPaths {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("inputs.template", &self.template)?;
        require_non_empty("inputs.crd_dir", &self.crd_dir)?;
        require_non_empty("inputs.crd_suffix", &self.crd_suffix)?;
        require_non_empty("inputs.cluster_role", &self.cluster_role)?;
        require_non_empty("inputs.operator", &self.operator)?;
        Ok(())
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    Ok(())
}

fn default_bundle_name() -> String {
    DEFAULT_BUNDLE_NAME.to_string()
}

fn default_version_base() -> String {
    DEFAULT_VERSION_BASE.to_string()
}

fn default_template() -> String {
    "config/templates/managed-velero-operator-csv-template.yaml".to_string()
}

fn default_crd_dir() -> String {
    "deploy/crds".to_string()
}

fn default_crd_suffix() -> String {
    "_crd.yaml".to_string()
}

fn default_cluster_role() -> String {
    "deploy/cluster_role.yaml".to_string()
}

fn default_operator() -> String {
    "deploy/operator.yaml".to_string()
}
