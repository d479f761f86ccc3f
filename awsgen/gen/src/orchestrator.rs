//! The end-to-end generation run.
//!
//! A run is split in two phases so a failure never leaves a partially
//! written package behind:
//!
//! 1. **Render**: validate the configuration, fetch the model repository,
//!    and render every file of every service in memory, parsing each Rust
//!    file with `syn`
//! 2. **Write**: write all rendered files atomically under the output root

use std::path::{Path, PathBuf};

use awsgen_define::{
    AsyncResultType, CodeGenerationCustomizations, ServiceModel, ServiceModelDetails,
    validate_service_details,
};
use tempfile::TempDir;
use tracing::info;

use crate::cargo_gen::{
    client_crate_name, generate_client_manifest, generate_model_manifest,
    generate_workspace_manifest, model_crate_name,
};
use crate::codegen::{AwsClientDelegate, AwsModelErrorsDelegate, ServiceModelCodeGenerator};
use crate::errors::GeneratorError;
use crate::fetch::ModelFetcher;
use crate::output::{GeneratedFile, render_model_lib, validate_source, write_files};
use crate::provider::{FileModelProvider, ModelProvider};

/// Where the models come from and how clients are shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub model_repository_url: String,
    pub model_repository_tag: String,
    pub async_result_type: AsyncResultType,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model_repository_url: awsgen_definitions::MODEL_REPOSITORY_URL.to_string(),
            model_repository_tag: awsgen_definitions::MODEL_REPOSITORY_TAG.to_string(),
            async_result_type: AsyncResultType::Native,
        }
    }
}

/// Drives a full generation run over a list of services.
pub struct Orchestrator<F: ModelFetcher> {
    services: Vec<ServiceModelDetails>,
    fetcher: F,
    settings: GenerationSettings,
}

impl<F: ModelFetcher> Orchestrator<F> {
    pub fn new(services: Vec<ServiceModelDetails>, fetcher: F, settings: GenerationSettings) -> Self {
        Self {
            services,
            fetcher,
            settings,
        }
    }

    /// Generates the package under `base_file_path`.
    ///
    /// Returns the paths of the written files, relative to `base_file_path`.
    ///
    /// ## Errors
    ///
    /// Returns the first configuration, fetch, model, or generation error.
    /// Nothing is written unless every service renders successfully.
    pub fn run(&self, base_file_path: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
        validate_service_details(&self.services)?;

        let checkout = TempDir::new().map_err(|e| GeneratorError::WriteError {
            path: std::env::temp_dir().display().to_string(),
            source: e,
        })?;
        let repository = checkout.path().join("models");
        self.fetcher.fetch(
            &self.settings.model_repository_url,
            &self.settings.model_repository_tag,
            &repository,
        )?;

        let provider = FileModelProvider::new(&repository);
        let files = render_package(&self.services, &provider, self.settings.async_result_type)?;
        write_files(base_file_path, &files)?;

        Ok(files.into_iter().map(|file| file.path).collect())
    }
}

/// Renders every file of the package without writing anything.
///
/// Services are rendered in list order; the workspace manifest comes last.
///
/// ## Errors
///
/// Returns the first model loading or generation error.
pub fn render_package(
    services: &[ServiceModelDetails],
    provider: &dyn ModelProvider,
    async_result_type: AsyncResultType,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut files = Vec::new();
    for details in services {
        let model = provider.load(details)?;
        let customizations = awsgen_definitions::customizations_for(details);
        files.extend(render_service(details, model, customizations, async_result_type)?);
    }

    let base_names: Vec<&str> = services.iter().map(|s| s.base_name.as_str()).collect();
    files.push(GeneratedFile::new(
        "Cargo.toml",
        generate_workspace_manifest(&base_names),
    ));
    Ok(files)
}

/// Renders the client and model crates of one service.
///
/// ## Errors
///
/// Returns `GeneratorError::MissingHttpBinding` for an undispatchable
/// operation, or `GeneratorError::InvalidGeneratedCode` if a rendered file
/// doesn't parse.
pub fn render_service(
    details: &ServiceModelDetails,
    model: ServiceModel,
    customizations: CodeGenerationCustomizations,
    async_result_type: AsyncResultType,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let base_name = details.base_name.as_str();
    let attributes = details.client_attributes();
    let generator = ServiceModelCodeGenerator::new(
        base_name,
        model,
        customizations,
        Box::new(AwsModelErrorsDelegate::new(attributes.clone())),
    );
    let client_delegate =
        AwsClientDelegate::new(base_name, attributes, async_result_type, details.sign_all_headers);

    let client_dir = PathBuf::from(client_crate_name(base_name));
    let model_dir = PathBuf::from(model_crate_name(base_name));

    let client_lib = generator.generate_client(&client_delegate)?;
    let client_lib_path = client_dir.join("src").join("lib.rs");
    validate_source(&client_lib_path.display().to_string(), &client_lib)?;

    let errors = generator.generate_model_errors()?;
    let errors_path = model_dir.join("src").join("errors.rs");
    validate_source(&errors_path.display().to_string(), &errors)?;

    let model_lib = render_model_lib(&generator.customizations.file_header, base_name)?;

    info!(
        base_name,
        operations = generator.model.operations.len(),
        errors = generator.model.error_types.len(),
        "rendered service"
    );

    Ok(vec![
        GeneratedFile::new(model_dir.join("Cargo.toml"), generate_model_manifest(base_name)),
        GeneratedFile::new(model_dir.join("src").join("lib.rs"), model_lib),
        GeneratedFile::new(errors_path, errors),
        GeneratedFile::new(
            client_dir.join("Cargo.toml"),
            generate_client_manifest(base_name, async_result_type),
        ),
        GeneratedFile::new(client_lib_path, client_lib),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StaticFetcher, make_details};
    use awsgen_define::{ContentType, HttpClientConfiguration, RetryBehavior};

    const MODEL: &str = r#"{
        "operations": {
            "SendMessage": {
                "httpVerb": "POST",
                "httpUrl": "/",
                "inputShapeName": "SendMessageRequest",
                "outputShapeName": "SendMessageResult"
            }
        },
        "errorTypes": ["ThrottlingException"]
    }"#;

    #[test]
    fn run_writes_both_crates_and_the_workspace() {
        let out = tempfile::TempDir::new().unwrap();
        let details = make_details("SimpleQueue", ContentType::QueryXml);
        let orchestrator = Orchestrator::new(
            vec![details.clone()],
            StaticFetcher::new(vec![(details, MODEL.to_string())]),
            GenerationSettings::default(),
        );

        let written = orchestrator.run(out.path()).unwrap();

        assert_eq!(written.len(), 6);
        for path in [
            "Cargo.toml",
            "simple-queue-client/Cargo.toml",
            "simple-queue-client/src/lib.rs",
            "simple-queue-model/Cargo.toml",
            "simple-queue-model/src/lib.rs",
            "simple-queue-model/src/errors.rs",
        ] {
            assert!(out.path().join(path).exists(), "missing {path}");
        }
    }

    #[test]
    fn invalid_configuration_fails_before_fetching() {
        let out = tempfile::TempDir::new().unwrap();
        let mut details = make_details("SimpleQueue", ContentType::QueryXml);
        details.http_client_configuration = HttpClientConfiguration::new(true, RetryBehavior::Fail)
            .with_retriable(["ThrottlingException"])
            .with_unretriable(["ThrottlingException"]);
        let fetcher = StaticFetcher::new(vec![]);
        let orchestrator = Orchestrator::new(vec![details], fetcher, GenerationSettings::default());

        let result = orchestrator.run(out.path());

        assert!(matches!(result, Err(GeneratorError::Definition(_))));
        assert_eq!(orchestrator.fetcher.fetch_count(), 0);
        assert!(!out.path().join("Cargo.toml").exists());
    }
}
