//! Loading pre-parsed service models.
//!
//! The model repository lays out one JSON document per service version:
//!
//! ```text
//! models/<service>/<api version>/service-model.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use awsgen_define::{ServiceModel, ServiceModelDetails};
use tracing::debug;

use crate::errors::GeneratorError;

/// Supplies the service model for a configured service.
pub trait ModelProvider {
    /// Loads the model of `details`, with its `ModelOverride` applied.
    ///
    /// ## Errors
    ///
    /// Returns an error if the model is missing, malformed, or declares the
    /// same error identity twice.
    fn load(&self, details: &ServiceModelDetails) -> Result<ServiceModel, GeneratorError>;
}

/// [`ModelProvider`] reading models from a checked-out model repository.
#[derive(Debug, Clone)]
pub struct FileModelProvider {
    root: PathBuf,
}

impl FileModelProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of a service's model file under the repository root.
    pub fn model_path(&self, details: &ServiceModelDetails) -> PathBuf {
        model_path(&self.root, details)
    }
}

fn model_path(root: &Path, details: &ServiceModelDetails) -> PathBuf {
    root.join("models")
        .join(&details.service_name)
        .join(&details.api_version)
        .join("service-model.json")
}

impl ModelProvider for FileModelProvider {
    fn load(&self, details: &ServiceModelDetails) -> Result<ServiceModel, GeneratorError> {
        let path = self.model_path(details);
        let path_str = path.display().to_string();
        debug!(base_name = %details.base_name, path = %path_str, "loading service model");

        let content = fs::read_to_string(&path).map_err(|e| GeneratorError::ModelReadError {
            path: path_str.clone(),
            source: e,
        })?;
        let mut model: ServiceModel =
            serde_json::from_str(&content).map_err(|e| GeneratorError::ModelParseError {
                path: path_str,
                source: e,
            })?;

        if let Some(model_override) = &details.model_override {
            model.append_errors(model_override.additional_errors.iter().map(String::as_str));
        }
        model.validate()?;

        Ok(model)
    }
}
