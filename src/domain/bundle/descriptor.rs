//! ClusterServiceVersion assembly.
//!
//! A [`BundleDescriptor`] holds every value the composer derives for one bundle.
//! [`BundleDescriptor::assemble`] lays those values over the template and returns
//! a new document; the template itself is left untouched, and keys the
//! composer does not own keep their original order and content.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_yaml::Value;

use super::{ClusterPermission, OperatorDeployment, OwnedCrd};
use crate::domain::AppError;
use crate::domain::yaml;

/// `metadata.annotations.createdAt` format, always rendered in UTC.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const DEPLOYMENT_SLOT: &str = "spec.install.spec.deployments[0]";

#[derive(Debug, Clone)]
pub struct BundleDescriptor {
    /// `metadata.name`, e.g. `operator.v0.1.41-def456`.
    pub name: String,
    pub version: String,
    /// `spec.replaces`, the CSV name of the previous bundle.
    pub replaces: String,
    pub created_at: DateTime<Utc>,
    pub owned_crds: Vec<OwnedCrd>,
    pub cluster_permissions: Vec<ClusterPermission>,
    pub deployment: OperatorDeployment,
}

impl BundleDescriptor {
    pub fn created_at_annotation(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }

    /// Build the output CSV from `template`.
    ///
    /// The template must provide `metadata`, `spec.install.spec` and a first
    /// deployment slot. Missing `metadata.annotations` and
    /// `spec.customresourcedefinitions` mappings are created.
    pub fn assemble(&self, source: &str, template: &Value) -> Result<Value, AppError> {
        let mut csv = template.clone();

        let slot = yaml::require_mapping_mut(&mut csv, DEPLOYMENT_SLOT, source)?;
        yaml::set(slot, "spec", self.deployment.spec().clone());

        let install = yaml::require_mapping_mut(&mut csv, "spec.install.spec", source)?;
        yaml::set(install, "clusterPermissions", to_value(&self.cluster_permissions)?);

        let spec = yaml::require_mapping_mut(&mut csv, "spec", source)?;
        let crds = yaml::ensure_mapping(
            spec,
            "customresourcedefinitions",
            source,
            "spec.customresourcedefinitions",
        )?;
        yaml::set(crds, "owned", to_value(&self.owned_crds)?);
        yaml::set(spec, "version", Value::String(self.version.clone()));
        yaml::set(spec, "replaces", Value::String(self.replaces.clone()));

        let metadata = yaml::require_mapping_mut(&mut csv, "metadata", source)?;
        yaml::set(metadata, "name", Value::String(self.name.clone()));
        let annotations =
            yaml::ensure_mapping(metadata, "annotations", source, "metadata.annotations")?;
        yaml::set(annotations, "createdAt", Value::String(self.created_at_annotation()));

        Ok(csv)
    }
}

/// Serialize an assembled CSV in block style.
pub fn render(csv: &Value) -> Result<String, AppError> {
    serde_yaml::to_string(csv).map_err(|err| AppError::Render(err.to_string()))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_yaml::to_value(value).map_err(|err| AppError::Render(err.to_string()))
}
