use serde::Serialize;
use serde_yaml::Value;

use crate::domain::AppError;
use crate::domain::yaml;

/// Entry of the CSV `spec.install.spec.clusterPermissions` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPermission {
    pub rules: Vec<Value>,
    pub service_account_name: String,
}

impl ClusterPermission {
    /// Bind the rules of a ClusterRole manifest to `service_account`.
    pub fn from_role(source: &str, role: &Value, service_account: &str) -> Result<Self, AppError> {
        let rules = yaml::require_sequence(role, "rules", source)?.clone();
        Ok(Self { rules, service_account_name: service_account.to_string() })
    }
}
