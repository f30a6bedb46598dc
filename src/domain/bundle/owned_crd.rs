use serde::Serialize;
use serde_yaml::Value;

use crate::domain::AppError;
use crate::domain::yaml;

/// Entry of the CSV `spec.customresourcedefinitions.owned` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCrd {
    pub name: String,
    pub description: String,
    pub display_name: String,
    pub kind: String,
    pub version: String,
}

impl OwnedCrd {
    /// Summarize a CustomResourceDefinition manifest.
    ///
    /// The version is read from `spec.version` when present, otherwise from
    /// `spec.versions`: the storage version if one is flagged, else the first entry.
    pub fn from_document(source: &str, document: &Value) -> Result<Self, AppError> {
        let name = yaml::require_scalar(document, "metadata.name", source)?;
        let kind = yaml::require_scalar(document, "spec.names.kind", source)?;
        let version = match yaml::lookup(document, "spec.version") {
            Some(_) => yaml::require_scalar(document, "spec.version", source)?,
            None => served_version(document, source)?,
        };

        Ok(Self { name, description: kind.clone(), display_name: kind.clone(), kind, version })
    }
}

fn served_version(document: &Value, source: &str) -> Result<String, AppError> {
    let versions = yaml::require_sequence(document, "spec.versions", source)?;
    let storage = versions.iter().position(|entry| {
        entry.as_mapping().and_then(|map| map.get("storage")).and_then(Value::as_bool)
            == Some(true)
    });
    let index = storage.unwrap_or(0);
    yaml::require_scalar(document, &format!("spec.versions[{}].name", index), source)
}
