//! Extension points through which a target customizes generated files.
//!
//! [`ServiceModelCodeGenerator`] owns the overall shape of the client and
//! error files. The delegates decide the target-specific parts: imports,
//! retry policy, request dispatch, and error payload decoding. Exactly one
//! implementation of each exists per target service family.

use awsgen_define::{ErrorIdentity, InvokeType, OperationDescription};

use crate::codegen::generator::ServiceModelCodeGenerator;
use crate::errors::GeneratorError;
use crate::file_builder::FileBuilder;

/// Name of a generated client type and the trait it implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientType {
    pub name: String,
    pub protocol_name: String,
}

/// Types flowing through one generated operation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationFunction<'a> {
    pub operation_name: &'a str,
    pub invoke_type: InvokeType,
    pub input_type: Option<&'a str>,
    pub output_type: Option<&'a str>,
}

/// Customizes the generated client file.
pub trait ModelClientDelegate {
    fn client_type(&self) -> &ClientType;

    /// One-line description placed in the client file's module docs.
    fn type_description(&self) -> &str;

    /// How async operations are declared in the protocol trait.
    fn async_result_type(&self) -> awsgen_define::AsyncResultType;

    /// Imports, client error type and retry classification.
    fn emit_file_header(&self, generator: &ServiceModelCodeGenerator, builder: &mut FileBuilder);

    /// The client struct and its inherent helpers.
    fn emit_common_functions(&self, generator: &ServiceModelCodeGenerator, builder: &mut FileBuilder);

    /// The body of one operation function.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::MissingHttpBinding` if the operation cannot be
    /// dispatched.
    fn emit_operation_body(
        &self,
        generator: &ServiceModelCodeGenerator,
        builder: &mut FileBuilder,
        function: OperationFunction<'_>,
        description: &OperationDescription,
    ) -> Result<(), GeneratorError>;
}

/// Variable names bound by the identity extraction routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityBindings {
    pub reason: &'static str,
    pub message: &'static str,
}

/// Customizes the generated error type of a service.
pub trait ModelErrorsDelegate {
    /// Whether the error type can be serialized back to a payload.
    fn generate_encode(&self) -> bool;

    /// Whether `Display` renders a human-readable message per case.
    fn generate_display(&self) -> bool;

    /// Whether the error type carries a validation-error case.
    fn can_expect_validation_error(&self) -> bool;

    fn emit_additional_imports(&self, _builder: &mut FileBuilder, _error_types: &[ErrorIdentity]) {}

    /// Identity constants for cases not declared by the model.
    fn emit_additional_error_identities(&self, builder: &mut FileBuilder, error_types: &[ErrorIdentity]);

    /// Number of cases [`Self::emit_additional_error_cases`] adds.
    fn additional_case_count(&self, error_types: &[ErrorIdentity]) -> usize;

    fn emit_additional_error_cases(&self, builder: &mut FileBuilder, error_types: &[ErrorIdentity]);

    /// The payload struct the discriminator is decoded from.
    fn emit_coding_keys(&self, builder: &mut FileBuilder, error_types: &[ErrorIdentity]);

    /// Decodes the payload and binds the canonical identity and message.
    fn emit_identity_extraction(&self, builder: &mut FileBuilder) -> IdentityBindings;

    /// Decode branches for the additional cases.
    fn emit_additional_decode_branches(
        &self,
        builder: &mut FileBuilder,
        error_types: &[ErrorIdentity],
        bindings: IdentityBindings,
    );
}
