//! Shared test utilities for awsgen-gen tests.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use awsgen_define::{ContentType, HttpClientConfiguration, RetryBehavior, ServiceModelDetails};

use crate::errors::GeneratorError;
use crate::fetch::ModelFetcher;

/// Creates the details of a service stored under `sqs/2012-11-05`.
pub fn make_details(base_name: &str, content_type: ContentType) -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "sqs".to_string(),
        api_version: "2012-11-05".to_string(),
        base_name: base_name.to_string(),
        content_type,
        endpoint_prefix: "sqs".to_string(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Fail),
        sign_all_headers: false,
    }
}

/// Writes `json` where the file provider expects the model of `details`.
pub fn write_model(root: &Path, details: &ServiceModelDetails, json: &str) {
    let dir = root
        .join("models")
        .join(&details.service_name)
        .join(&details.api_version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("service-model.json"), json).unwrap();
}

/// A fetcher that materializes fixed model documents instead of cloning.
pub struct StaticFetcher {
    models: Vec<(ServiceModelDetails, String)>,
    fetches: Cell<usize>,
}

impl StaticFetcher {
    pub fn new(models: Vec<(ServiceModelDetails, String)>) -> Self {
        Self {
            models,
            fetches: Cell::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl ModelFetcher for StaticFetcher {
    fn fetch(&self, _url: &str, _tag: &str, destination: &Path) -> Result<(), GeneratorError> {
        self.fetches.set(self.fetches.get() + 1);
        for (details, json) in &self.models {
            write_model(destination, details, json);
        }
        Ok(())
    }
}
