//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use awsgen_define::{
    AsyncResultType, CodeGenerationCustomizations, ContentType, ErrorIdentity,
    HttpClientConfiguration, OperationDescription, RetryBehavior, ServiceModel,
    ServiceModelDetails,
};
use awsgen_gen::errors::GeneratorError;
use awsgen_gen::fetch::ModelFetcher;
use awsgen_gen::orchestrator::render_service;
use awsgen_gen::output::GeneratedFile;

pub const HEADER: &str = "// Generated for tests.";

pub fn details(base_name: &str, content_type: ContentType) -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: base_name.to_lowercase(),
        api_version: "2012-11-05".to_string(),
        base_name: base_name.to_string(),
        content_type,
        endpoint_prefix: base_name.to_lowercase(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Fail),
        sign_all_headers: false,
    }
}

pub fn model(operations: &[(&str, OperationDescription)], errors: &[&str]) -> ServiceModel {
    ServiceModel {
        operations: operations
            .iter()
            .map(|(name, description)| (name.to_string(), description.clone()))
            .collect(),
        error_types: errors.iter().map(|name| ErrorIdentity::new(name)).collect(),
    }
}

/// Renders one service with a fixed file header and native async functions.
pub fn render(
    details: &ServiceModelDetails,
    model: ServiceModel,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    render_with(details, model, AsyncResultType::Native)
}

pub fn render_with(
    details: &ServiceModelDetails,
    model: ServiceModel,
    async_result_type: AsyncResultType,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let customizations =
        CodeGenerationCustomizations::new(HEADER, details.http_client_configuration.clone());
    render_service(details, model, customizations, async_result_type)
}

/// Content of the rendered file whose path ends with `suffix`.
pub fn file<'a>(files: &'a [GeneratedFile], suffix: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path.ends_with(suffix))
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("no rendered file ends with {suffix}"))
}

/// A fetcher that writes fixed model documents instead of cloning.
pub struct FixtureFetcher {
    pub models: Vec<(ServiceModelDetails, String)>,
}

impl ModelFetcher for FixtureFetcher {
    fn fetch(&self, _url: &str, _tag: &str, destination: &Path) -> Result<(), GeneratorError> {
        for (details, json) in &self.models {
            let dir = destination
                .join("models")
                .join(&details.service_name)
                .join(&details.api_version);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("service-model.json"), json).unwrap();
        }
        Ok(())
    }
}
