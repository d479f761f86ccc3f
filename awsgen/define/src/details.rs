//! Static per-service generation configuration.

use std::collections::BTreeSet;

use crate::attributes::{ClientAttributes, ContentType};
use crate::errors::DefinitionError;
use crate::http_client::HttpClientConfiguration;

/// Adjustments applied to a service model after it is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOverride {
    /// Errors the service returns but its model does not declare.
    ///
    /// Appended after the declared errors, skipping any already declared.
    pub additional_errors: Vec<String>,
}

/// How generated error cases outside the model are exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDeclaration {
    /// Present on the enum but hidden from documentation.
    #[default]
    Internal,
    /// A documented part of the public error enum.
    External,
}

/// Settings shared by every file generated for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenerationCustomizations {
    /// Literal banner placed at the top of every generated file.
    pub file_header: String,
    pub http_client_configuration: HttpClientConfiguration,
    pub validation_error_declaration: ErrorDeclaration,
    pub unrecognized_error_declaration: ErrorDeclaration,
}

impl CodeGenerationCustomizations {
    pub fn new(file_header: impl Into<String>, http: HttpClientConfiguration) -> Self {
        Self {
            file_header: file_header.into(),
            http_client_configuration: http,
            validation_error_declaration: ErrorDeclaration::Internal,
            unrecognized_error_declaration: ErrorDeclaration::Internal,
        }
    }
}

/// Everything the generator needs to know about one service up front.
///
/// Constructed once at process start and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceModelDetails {
    /// Directory name of the service in the model repository (`sqs`).
    pub service_name: String,
    /// Model version directory and API version sent on the wire.
    pub api_version: String,
    /// Drives generated type and crate names; must be unique.
    pub base_name: String,
    pub content_type: ContentType,
    /// Signing name and endpoint prefix.
    pub endpoint_prefix: String,
    /// JSON target prefix (`DynamoDB_20120810`), if the protocol uses one.
    pub target_prefix: Option<String>,
    pub global_endpoint: Option<String>,
    pub model_override: Option<ModelOverride>,
    pub http_client_configuration: HttpClientConfiguration,
    pub sign_all_headers: bool,
}

impl ServiceModelDetails {
    /// Derives the attributes of this service's generated client.
    pub fn client_attributes(&self) -> ClientAttributes {
        ClientAttributes {
            content_type: self.content_type,
            api_version: self.api_version.clone(),
            service: self.endpoint_prefix.clone(),
            target: self.target_prefix.clone(),
            global_endpoint: self.global_endpoint.clone(),
        }
    }
}

/// Validates a configuration list before any generation starts.
///
/// ## Errors
///
/// Returns the first retry-override problem found, or
/// `DefinitionError::DuplicateBaseName` if two services share a base name.
pub fn validate_service_details(details: &[ServiceModelDetails]) -> Result<(), DefinitionError> {
    let mut base_names = BTreeSet::new();
    for service in details {
        service.http_client_configuration.validate()?;
        if !base_names.insert(service.base_name.as_str()) {
            return Err(DefinitionError::DuplicateBaseName(service.base_name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::RetryBehavior;

    fn details(base_name: &str) -> ServiceModelDetails {
        ServiceModelDetails {
            service_name: "sqs".to_string(),
            api_version: "2012-11-05".to_string(),
            base_name: base_name.to_string(),
            content_type: ContentType::QueryXml,
            endpoint_prefix: "sqs".to_string(),
            target_prefix: None,
            global_endpoint: None,
            model_override: None,
            http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Fail),
            sign_all_headers: false,
        }
    }

    #[test]
    fn client_attributes_derive_from_details() {
        let attributes = details("SimpleQueue").client_attributes();
        assert_eq!(attributes.content_type, ContentType::QueryXml);
        assert_eq!(attributes.api_version, "2012-11-05");
        assert_eq!(attributes.service, "sqs");
        assert_eq!(attributes.target, None);
    }

    #[test]
    fn validate_rejects_duplicate_base_names() {
        let list = [details("SimpleQueue"), details("SimpleQueue")];
        assert_eq!(
            validate_service_details(&list),
            Err(DefinitionError::DuplicateBaseName("SimpleQueue".to_string()))
        );
    }

    #[test]
    fn validate_checks_retry_overrides() {
        let mut service = details("SimpleQueue");
        service.http_client_configuration =
            HttpClientConfiguration::new(true, RetryBehavior::Fail).with_unretriable(["Oops"]);

        assert!(matches!(
            validate_service_details(&[service]),
            Err(DefinitionError::InertRetryOverride { .. })
        ));
    }

    #[test]
    fn validate_accepts_distinct_services() {
        let list = [details("SimpleQueue"), details("SimpleNotification")];
        assert!(validate_service_details(&list).is_ok());
    }
}
