use serde_yaml::Value;

use crate::domain::AppError;
use crate::domain::yaml;

/// Container index patched with the operator image.
const OPERATOR_CONTAINER: &str = "template.spec.containers[0]";

/// Deployment spec taken from the operator manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDeployment {
    spec: Value,
}

impl OperatorDeployment {
    /// Take `spec` from the first document of a manifest stream.
    pub fn from_stream(source: &str, content: &str) -> Result<Self, AppError> {
        let document = yaml::parse_first_document(source, content)?
            .ok_or_else(|| AppError::structure(source, "<first document>"))?;
        let spec = yaml::require(&document, "spec", source)?.clone();
        Ok(Self { spec })
    }

    /// Set the operator container image, replacing any image already present.
    pub fn with_image(mut self, source: &str, image: &str) -> Result<Self, AppError> {
        let container = yaml::lookup_mut(&mut self.spec, OPERATOR_CONTAINER)
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| AppError::structure(source, format!("spec.{}", OPERATOR_CONTAINER)))?;
        yaml::set(container, "image", Value::String(image.to_string()));
        Ok(self)
    }

    pub fn spec(&self) -> &Value {
        &self.spec
    }
}
