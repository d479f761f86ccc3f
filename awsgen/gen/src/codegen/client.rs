//! Client delegate for AWS services.
//!
//! Generates a client that signs requests with AWS credentials, dispatches
//! them through the `aws_client_http` runtime, and retries failures per the
//! service's [`HttpClientConfiguration`](awsgen_define::HttpClientConfiguration).
//!
//! The header of the client file carries:
//!
//! - imports of the runtime and the service's model crate
//! - a `<Base>ClientError` enum for failures raised by the client itself
//! - a private `RetriableError` trait implemented for the service error and
//!   for any boxed error
//!
//! ## Examples
//!
//! ```
//! use awsgen_define::{AsyncResultType, ClientAttributes, ContentType};
//! use awsgen_gen::codegen::AwsClientDelegate;
//! use awsgen_gen::codegen::delegate::ModelClientDelegate;
//!
//! let attributes = ClientAttributes {
//!     content_type: ContentType::QueryXml,
//!     api_version: "2012-11-05".to_string(),
//!     service: "sqs".to_string(),
//!     target: None,
//!     global_endpoint: None,
//! };
//! let delegate = AwsClientDelegate::new("SimpleQueue", attributes, AsyncResultType::Native, false);
//!
//! assert_eq!(delegate.client_type().name, "SimpleQueueClient");
//! assert_eq!(delegate.client_type().protocol_name, "SimpleQueueClientProtocol");
//! ```

use awsgen_define::{AsyncResultType, ClientAttributes, InputLocation, OperationDescription};

use crate::codegen::delegate::{ClientType, ModelClientDelegate, OperationFunction};
use crate::codegen::generator::ServiceModelCodeGenerator;
use crate::codegen::operation::{OperationInvocation, emit_operation_body};
use crate::codegen::retry::{RetryClassification, emit_retriable_extensions};
use crate::errors::GeneratorError;
use crate::file_builder::FileBuilder;

const DEFAULT_ENDPOINT_PORT: u16 = 443;

/// [`ModelClientDelegate`] producing AWS-signed clients.
#[derive(Debug, Clone)]
pub struct AwsClientDelegate {
    client_type: ClientType,
    type_description: String,
    client_attributes: ClientAttributes,
    async_result_type: AsyncResultType,
    sign_all_headers: bool,
}

impl AwsClientDelegate {
    pub fn new(
        base_name: &str,
        client_attributes: ClientAttributes,
        async_result_type: AsyncResultType,
        sign_all_headers: bool,
    ) -> Self {
        Self {
            client_type: ClientType {
                name: format!("{base_name}Client"),
                protocol_name: format!("{base_name}ClientProtocol"),
            },
            type_description: format!("AWS client for the {base_name} service."),
            client_attributes,
            async_result_type,
            sign_all_headers,
        }
    }

    fn client_error_type(&self, generator: &ServiceModelCodeGenerator) -> String {
        format!("{}ClientError", generator.base_name)
    }

    fn emit_client_error(&self, generator: &ServiceModelCodeGenerator, builder: &mut FileBuilder) {
        let client_error = self.client_error_type(generator);
        builder.append_line(&format!(
            "/// Errors raised by the {} client itself.",
            generator.base_name
        ));
        builder.append_line("#[derive(Debug, Clone, PartialEq, Eq)]");
        builder.append_line(&format!("pub enum {client_error} {{"));
        builder.indented(|b| {
            b.append_line("InvalidEndpoint(String),");
            b.append_line("UnsupportedPayload,");
            b.append_line("UnknownError(Option<String>),");
        });
        builder.append_line("}");
        builder.append_empty_line();

        builder.append_line(&format!("impl std::fmt::Display for {client_error} {{"));
        builder.indented(|b| {
            b.append_line("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
            b.indented(|b| {
                b.append_line("match self {");
                b.indented(|b| {
                    b.append_line(
                        "Self::InvalidEndpoint(endpoint) => write!(f, \"invalid endpoint '{endpoint}'\"),",
                    );
                    b.append_line("Self::UnsupportedPayload => write!(f, \"unsupported payload\"),");
                    b.append_line(
                        "Self::UnknownError(reason) => write!(f, \"unknown error: {}\", reason.as_deref().unwrap_or(\"none\")),",
                    );
                });
                b.append_line("}");
            });
            b.append_line("}");
        });
        builder.append_line("}");
        builder.append_empty_line();
        builder.append_line(&format!("impl std::error::Error for {client_error} {{}}"));
        builder.append_empty_line();
    }
}

impl ModelClientDelegate for AwsClientDelegate {
    fn client_type(&self) -> &ClientType {
        &self.client_type
    }

    fn type_description(&self) -> &str {
        &self.type_description
    }

    fn async_result_type(&self) -> AsyncResultType {
        self.async_result_type
    }

    fn emit_file_header(&self, generator: &ServiceModelCodeGenerator, builder: &mut FileBuilder) {
        let wrapper = match self.client_attributes.default_input_location() {
            InputLocation::Query => "QueryWrapper",
            InputLocation::Body => "BodyWrapper",
        };
        builder.append_line("use std::sync::Arc;");
        builder.append_empty_line();
        builder.append_line("use aws_client_core::{AwsRegion, CredentialsProvider};");
        builder.append_line(&format!(
            "use aws_client_http::{{AwsHttpClient, ContentType, InvocationContext, RetryConfiguration, {wrapper}}};"
        ));
        if self.async_result_type == AsyncResultType::BoxFuture {
            builder.append_line("use futures::future::BoxFuture;");
        }
        builder.append_line(&format!("use {}::*;", generator.model_crate_ident()));
        builder.append_empty_line();

        self.emit_client_error(generator, builder);

        let http = &generator.customizations.http_client_configuration;
        let classification = RetryClassification::classify(
            &generator.model.error_types,
            http,
            generator.implicit_error_case_count(),
        );
        emit_retriable_extensions(
            builder,
            &generator.error_type_name(),
            &classification,
            http.retry_on_unknown_error,
        );
    }

    fn emit_common_functions(&self, generator: &ServiceModelCodeGenerator, builder: &mut FileBuilder) {
        let client = &self.client_type.name;
        let client_error = self.client_error_type(generator);
        let attributes = &self.client_attributes;

        builder.append_line(&format!(
            "/// AWS client for the {} service.",
            generator.base_name
        ));
        builder.append_line(&format!("pub struct {client} {{"));
        builder.indented(|b| {
            b.append_line("http_client: AwsHttpClient,");
            b.append_line("credentials_provider: Arc<dyn CredentialsProvider + Send + Sync>,");
            b.append_line("region: AwsRegion,");
            b.append_line("service: String,");
            b.append_line("api_version: String,");
            b.append_line("target: Option<String>,");
            b.append_line("retry_configuration: RetryConfiguration,");
        });
        builder.append_line("}");
        builder.append_empty_line();

        builder.append_line(&format!("impl {client} {{"));
        builder.inc_indent();
        builder.append_line(&format!(
            "/// Creates a client for the {} service.",
            generator.base_name
        ));
        builder.append_line("///");
        builder.append_line(&format!(
            "/// Returns `{client_error}::InvalidEndpoint` if `endpoint_host_name` is empty."
        ));
        builder.append_line("pub fn new(");
        builder.indented(|b| {
            b.append_line("credentials_provider: Arc<dyn CredentialsProvider + Send + Sync>,");
            b.append_line("region: AwsRegion,");
            b.append_line("endpoint_host_name: &str,");
            b.append_line("endpoint_port: u16,");
            b.append_line("retry_configuration: RetryConfiguration,");
        });
        builder.append_line(&format!(") -> Result<Self, {client_error}> {{"));
        builder.indented(|b| {
            b.append_line("if endpoint_host_name.is_empty() {");
            b.indented(|b| {
                b.append_line(&format!(
                    "return Err({client_error}::InvalidEndpoint(endpoint_host_name.to_string()));"
                ));
            });
            b.append_line("}");
            b.append_empty_line();
            b.append_line("Ok(Self {");
            b.indented(|b| {
                b.append_line(&format!(
                    "http_client: AwsHttpClient::new(endpoint_host_name, endpoint_port, ContentType::{}),",
                    attributes.content_type.runtime_variant()
                ));
                b.append_line("credentials_provider,");
                b.append_line("region,");
                b.append_line(&format!("service: \"{}\".to_string(),", attributes.service));
                b.append_line(&format!(
                    "api_version: \"{}\".to_string(),",
                    attributes.api_version
                ));
                match &attributes.target {
                    Some(target) => b.append_line(&format!("target: Some(\"{target}\".to_string()),")),
                    None => b.append_line("target: None,"),
                }
                b.append_line("retry_configuration,");
            });
            b.append_line("})");
        });
        builder.append_line("}");

        if let Some(endpoint) = &attributes.global_endpoint {
            builder.append_empty_line();
            builder.append_line(&format!(
                "/// Creates a client for the global `{endpoint}` endpoint."
            ));
            builder.append_line("pub fn for_global_endpoint(");
            builder.indented(|b| {
                b.append_line("credentials_provider: Arc<dyn CredentialsProvider + Send + Sync>,");
                b.append_line("retry_configuration: RetryConfiguration,");
            });
            builder.append_line(&format!(") -> Result<Self, {client_error}> {{"));
            builder.indented(|b| {
                b.append_line(&format!(
                    "Self::new(credentials_provider, AwsRegion::UsEast1, \"{endpoint}\", {DEFAULT_ENDPOINT_PORT}, retry_configuration)"
                ));
            });
            builder.append_line("}");
        }

        builder.append_empty_line();
        builder.append_line(
            "fn invocation_context(&self, operation: &'static str, sign_all_headers: bool) -> InvocationContext<'_> {",
        );
        builder.indented(|b| {
            b.append_line("InvocationContext {");
            b.indented(|b| {
                b.append_line("credentials_provider: self.credentials_provider.as_ref(),");
                b.append_line("region: &self.region,");
                b.append_line("service: &self.service,");
                b.append_line("operation,");
                b.append_line("target: self.target.as_deref(),");
                b.append_line("sign_all_headers,");
            });
            b.append_line("}");
        });
        builder.append_line("}");
        builder.dec_indent();
        builder.append_line("}");
        builder.append_empty_line();
    }

    fn emit_operation_body(
        &self,
        _generator: &ServiceModelCodeGenerator,
        builder: &mut FileBuilder,
        function: OperationFunction<'_>,
        description: &OperationDescription,
    ) -> Result<(), GeneratorError> {
        let invocation = OperationInvocation::resolve(
            function,
            description,
            self.sign_all_headers,
            self.async_result_type,
        )?;
        emit_operation_body(
            builder,
            self.client_attributes.default_input_location(),
            &invocation,
        );
        Ok(())
    }
}
