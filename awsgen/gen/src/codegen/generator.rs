//! Generation context for one service and the fixed file layouts.
//!
//! The client file is laid out as:
//!
//! ```text
//! <file header banner>
//! //! <type description>
//! <delegate: imports, client error type, retry classification>
//! <protocol trait with a blocking and an async function per operation>
//! <delegate: client struct and constructor>
//! impl <Protocol> for <Client> { <delegate: one body per function> }
//! ```
//!
//! The errors file declares one identity constant and one enum case per
//! declared error, followed by the payload decoder the delegate describes.

use awsgen_define::naming::to_snake_case;
use awsgen_define::{
    AsyncResultType, CodeGenerationCustomizations, ErrorDeclaration, ErrorIdentity, InvokeType,
    ServiceModel,
};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::codegen::delegate::{ModelClientDelegate, ModelErrorsDelegate, OperationFunction};
use crate::errors::GeneratorError;
use crate::file_builder::FileBuilder;

/// Enum case name for an error identity (`ThrottlingException`).
pub fn error_variant_name(identity: &ErrorIdentity) -> String {
    identity.variant_name()
}

/// Identity constant name for an error identity (`THROTTLING_EXCEPTION_IDENTITY`).
pub fn error_identity_constant(identity: &ErrorIdentity) -> String {
    identity.identity_constant()
}

/// Function name generated for an operation under an invocation style.
///
/// ## Examples
///
/// ```
/// use awsgen_define::InvokeType;
/// use awsgen_gen::codegen::operation_function_name;
///
/// assert_eq!(operation_function_name("SendMessage", InvokeType::Async), "send_message");
/// assert_eq!(operation_function_name("SendMessage", InvokeType::Blocking), "send_message_sync");
/// ```
pub fn operation_function_name(operation: &str, invoke_type: InvokeType) -> String {
    let name = to_snake_case(operation);
    match invoke_type {
        InvokeType::Blocking => format!("{name}_sync"),
        InvokeType::Async => name,
    }
}

/// Everything known while generating the files of one service.
pub struct ServiceModelCodeGenerator {
    pub base_name: String,
    pub model: ServiceModel,
    pub customizations: CodeGenerationCustomizations,
    errors_delegate: Box<dyn ModelErrorsDelegate>,
}

impl ServiceModelCodeGenerator {
    pub fn new(
        base_name: impl Into<String>,
        model: ServiceModel,
        customizations: CodeGenerationCustomizations,
        errors_delegate: Box<dyn ModelErrorsDelegate>,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            model,
            customizations,
            errors_delegate,
        }
    }

    /// Name of the generated error enum (`SimpleQueueError`).
    pub fn error_type_name(&self) -> String {
        format!("{}Error", self.base_name)
    }

    /// Rust identifier of the generated model crate (`simple_queue_model`).
    pub fn model_crate_ident(&self) -> String {
        format!("{}_model", to_snake_case(&self.base_name))
    }

    /// Number of error enum cases not backed by a declared identity.
    ///
    /// Always at least one: the case holding unrecognized identities.
    pub fn implicit_error_case_count(&self) -> usize {
        let delegate = self.errors_delegate.as_ref();
        let validation = usize::from(delegate.can_expect_validation_error());
        delegate.additional_case_count(&self.model.error_types) + validation + 1
    }

    /// Renders the client file.
    ///
    /// Operations are emitted in name order, each with a blocking and an
    /// async function.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::MissingHttpBinding` if an operation lacks a
    /// verb or URL, or `GeneratorError::UnbalancedIndentation` if an emitter
    /// misbehaves.
    pub fn generate_client(&self, delegate: &dyn ModelClientDelegate) -> Result<String, GeneratorError> {
        let client_type = delegate.client_type();
        debug!(
            base_name = %self.base_name,
            operations = self.model.operations.len(),
            "generating client"
        );

        let mut builder = FileBuilder::new();
        builder.append_line(&self.customizations.file_header);
        builder.append_empty_line();
        builder.append_line(&format!("//! {}", delegate.type_description()));
        builder.append_empty_line();

        delegate.emit_file_header(self, &mut builder);

        builder.append_line(&format!("/// Operations of the {} service.", self.base_name));
        builder.append_line(&format!("pub trait {} {{", client_type.protocol_name));
        builder.inc_indent();
        let mut first = true;
        for function in self.operation_functions() {
            if !first {
                builder.append_empty_line();
            }
            first = false;
            builder.append_line(&self.function_doc(&function));
            builder.append_line(&format!(
                "{};",
                self.function_signature(&function, delegate.async_result_type())
            ));
        }
        builder.dec_indent();
        builder.append_line("}");
        builder.append_empty_line();

        delegate.emit_common_functions(self, &mut builder);

        builder.append_line(&format!(
            "impl {} for {} {{",
            client_type.protocol_name, client_type.name
        ));
        builder.inc_indent();
        let mut first = true;
        for function in self.operation_functions() {
            if !first {
                builder.append_empty_line();
            }
            first = false;
            let description = &self.model.operations[function.operation_name];
            builder.append_line(&format!(
                "{} {{",
                self.function_signature(&function, delegate.async_result_type())
            ));
            builder.inc_indent();
            delegate.emit_operation_body(self, &mut builder, function, description)?;
            builder.dec_indent();
            builder.append_line("}");
        }
        builder.dec_indent();
        builder.append_line("}");

        builder.finish()
    }

    /// Renders the model crate's errors file.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::UnbalancedIndentation` if an emitter misbehaves.
    pub fn generate_model_errors(&self) -> Result<String, GeneratorError> {
        let delegate = self.errors_delegate.as_ref();
        let error_types = &self.model.error_types;
        let error_type = self.error_type_name();
        debug!(
            base_name = %self.base_name,
            error_types = error_types.len(),
            "generating model errors"
        );

        let mut builder = FileBuilder::new();
        builder.append_line(&self.customizations.file_header);
        builder.append_empty_line();
        builder.append_line(&format!("//! Errors returned by the {} service.", self.base_name));
        builder.append_empty_line();
        builder.append_line("use std::fmt;");
        builder.append_empty_line();
        builder.append_line("use serde::Deserialize;");
        delegate.emit_additional_imports(&mut builder, error_types);
        builder.append_empty_line();

        for identity in error_types {
            builder.append_line(&format!(
                "const {}: &str = \"{}\";",
                error_identity_constant(identity),
                identity.declared_name
            ));
        }
        delegate.emit_additional_error_identities(&mut builder, error_types);
        builder.append_empty_line();

        let derives = if delegate.generate_encode() {
            "#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]"
        } else {
            "#[derive(Debug, Clone, PartialEq, Eq)]"
        };
        builder.append_line(&format!("/// Errors modeled by the {} service.", self.base_name));
        builder.append_line(derives);
        builder.append_line(&format!("pub enum {error_type} {{"));
        builder.indented(|b| {
            for identity in error_types {
                b.append_line(&format!(
                    "{} {{ message: Option<String> }},",
                    error_variant_name(identity)
                ));
            }
            delegate.emit_additional_error_cases(b, error_types);
            if delegate.can_expect_validation_error() {
                b.append_line(&declaration_attribute(
                    self.customizations.validation_error_declaration,
                    "The request failed client-side validation.",
                ));
                b.append_line("ValidationError { reason: String },");
            }
            b.append_line(&declaration_attribute(
                self.customizations.unrecognized_error_declaration,
                "An error identity the model does not declare.",
            ));
            b.append_line("UnrecognizedError { error_type: String, message: Option<String> },");
        });
        builder.append_line("}");
        builder.append_empty_line();

        delegate.emit_coding_keys(&mut builder, error_types);
        builder.append_empty_line();

        builder.append_line(&format!("impl<'de> Deserialize<'de> for {error_type} {{"));
        builder.inc_indent();
        builder.append_line("fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>");
        builder.append_line("where");
        builder.indented(|b| b.append_line("D: serde::Deserializer<'de>,"));
        builder.append_line("{");
        builder.inc_indent();
        let bindings = delegate.emit_identity_extraction(&mut builder);
        builder.append_empty_line();
        builder.append_line(&format!("let error = match {}.as_str() {{", bindings.reason));
        builder.inc_indent();
        for identity in error_types {
            builder.append_line(&format!(
                "{} => Self::{} {{ message: {} }},",
                error_identity_constant(identity),
                error_variant_name(identity),
                bindings.message
            ));
        }
        delegate.emit_additional_decode_branches(&mut builder, error_types, bindings);
        builder.append_line(&format!(
            "_ => Self::UnrecognizedError {{ error_type: {}, message: {} }},",
            bindings.reason, bindings.message
        ));
        builder.dec_indent();
        builder.append_line("};");
        builder.append_line("Ok(error)");
        builder.dec_indent();
        builder.append_line("}");
        builder.dec_indent();
        builder.append_line("}");
        builder.append_empty_line();

        builder.append_line(&format!("impl fmt::Display for {error_type} {{"));
        builder.indented(|b| {
            b.append_line("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
            b.indented(|b| {
                if delegate.generate_display() {
                    self.emit_display_match(b);
                } else {
                    b.append_line("write!(f, \"{self:?}\")");
                }
            });
            b.append_line("}");
        });
        builder.append_line("}");
        builder.append_empty_line();
        builder.append_line(&format!("impl std::error::Error for {error_type} {{}}"));

        builder.finish()
    }

    fn emit_display_match(&self, builder: &mut FileBuilder) {
        builder.append_line("match self {");
        builder.indented(|b| {
            for identity in &self.model.error_types {
                b.append_line(&format!(
                    "Self::{} {{ message }} => write!(f, \"{}: {{}}\", message.as_deref().unwrap_or_default()),",
                    error_variant_name(identity),
                    identity.declared_name
                ));
            }
            b.append_line("Self::UnrecognizedError { error_type, message } => {");
            b.indented(|b| {
                b.append_line(
                    "write!(f, \"{error_type}: {}\", message.as_deref().unwrap_or_default())",
                );
            });
            b.append_line("}");
            b.append_line("other => write!(f, \"{other:?}\"),");
        });
        builder.append_line("}");
    }

    /// Operation functions in emission order.
    fn operation_functions(&self) -> impl Iterator<Item = OperationFunction<'_>> {
        self.model
            .operations
            .iter()
            .flat_map(|(name, description)| {
                InvokeType::iter().map(move |invoke_type| OperationFunction {
                    operation_name: name.as_str(),
                    invoke_type,
                    input_type: description.input_shape_name.as_deref(),
                    output_type: description.output_shape_name.as_deref(),
                })
            })
    }

    fn function_doc(&self, function: &OperationFunction<'_>) -> String {
        match function.invoke_type {
            InvokeType::Blocking => format!(
                "/// Invokes the {} operation, blocking until it completes.",
                function.operation_name
            ),
            InvokeType::Async => format!("/// Invokes the {} operation.", function.operation_name),
        }
    }

    /// Signature shared by the protocol trait and the client impl.
    pub fn function_signature(
        &self,
        function: &OperationFunction<'_>,
        async_result_type: AsyncResultType,
    ) -> String {
        let name = operation_function_name(function.operation_name, function.invoke_type);
        let params = match function.input_type {
            Some(input) => format!("&self, input: {input}"),
            None => "&self".to_string(),
        };
        let result = format!(
            "Result<{}, {}>",
            function.output_type.unwrap_or("()"),
            self.error_type_name()
        );

        match (function.invoke_type, async_result_type) {
            (InvokeType::Blocking, _) => format!("fn {name}({params}) -> {result}"),
            (InvokeType::Async, AsyncResultType::Native) => {
                format!("async fn {name}({params}) -> {result}")
            }
            (InvokeType::Async, AsyncResultType::BoxFuture) => {
                format!("fn {name}({params}) -> BoxFuture<'_, {result}>")
            }
        }
    }
}

fn declaration_attribute(declaration: ErrorDeclaration, doc: &str) -> String {
    match declaration {
        ErrorDeclaration::Internal => "#[doc(hidden)]".to_string(),
        ErrorDeclaration::External => format!("/// {doc}"),
    }
}
