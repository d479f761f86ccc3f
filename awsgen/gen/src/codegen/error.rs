//! Errors delegate for AWS services.
//!
//! AWS error payloads carry the error identity in a discriminator field
//! (`Code` for XML payloads, `__type` for JSON) next to a message field. The
//! identity may be namespace-qualified; the generated decoder strips
//! everything up to and including the first `#` before matching.
//!
//! Every AWS service can answer with `AccessDenied`, so the generated error
//! type always has a case for it. When the model does not declare one, this
//! delegate injects the case, its identity constant, and its decode branch.

use awsgen_define::{ClientAttributes, ErrorIdentity};

use crate::codegen::delegate::{IdentityBindings, ModelErrorsDelegate};
use crate::file_builder::FileBuilder;

/// Normalized name the access-denied error is recognized by.
pub const ACCESS_DENIED_NORMALIZED_NAME: &str = "accessDenied";

/// Wire identity of the injected access-denied error.
pub const ACCESS_DENIED_IDENTITY: &str = "AccessDenied";

const BINDINGS: IdentityBindings = IdentityBindings {
    reason: "error_reason",
    message: "error_message",
};

/// [`ModelErrorsDelegate`] for AWS error payloads.
#[derive(Debug, Clone)]
pub struct AwsModelErrorsDelegate {
    client_attributes: ClientAttributes,
}

impl AwsModelErrorsDelegate {
    pub fn new(client_attributes: ClientAttributes) -> Self {
        Self { client_attributes }
    }

    /// Whether the access-denied case must be added to `error_types`.
    pub fn injects_access_denied(error_types: &[ErrorIdentity]) -> bool {
        !error_types
            .iter()
            .any(|identity| identity.normalized_name == ACCESS_DENIED_NORMALIZED_NAME)
    }
}

impl ModelErrorsDelegate for AwsModelErrorsDelegate {
    fn generate_encode(&self) -> bool {
        false
    }

    fn generate_display(&self) -> bool {
        false
    }

    fn can_expect_validation_error(&self) -> bool {
        false
    }

    fn emit_additional_error_identities(&self, builder: &mut FileBuilder, error_types: &[ErrorIdentity]) {
        if Self::injects_access_denied(error_types) {
            builder.append_line(&format!(
                "const ACCESS_DENIED_IDENTITY: &str = \"{ACCESS_DENIED_IDENTITY}\";"
            ));
        }
    }

    fn additional_case_count(&self, error_types: &[ErrorIdentity]) -> usize {
        usize::from(Self::injects_access_denied(error_types))
    }

    fn emit_additional_error_cases(&self, builder: &mut FileBuilder, error_types: &[ErrorIdentity]) {
        if Self::injects_access_denied(error_types) {
            builder.append_line("AccessDenied { message: Option<String> },");
        }
    }

    fn emit_coding_keys(&self, builder: &mut FileBuilder, _error_types: &[ErrorIdentity]) {
        let fields = self.client_attributes.payload_discriminator_fields();
        builder.append_line("#[derive(Deserialize)]");
        builder.append_line("struct ErrorPayload {");
        builder.indented(|b| {
            b.append_line(&format!("#[serde(rename = \"{}\")]", fields.type_field));
            b.append_line("error_type: String,");
            b.append_line(&format!(
                "#[serde(rename = \"{}\", default)]",
                fields.message_field
            ));
            b.append_line("message: Option<String>,");
        });
        builder.append_line("}");
    }

    fn emit_identity_extraction(&self, builder: &mut FileBuilder) -> IdentityBindings {
        builder.append_line("let payload = ErrorPayload::deserialize(deserializer)?;");
        builder.append_line(&format!("let mut {} = payload.error_type;", BINDINGS.reason));
        builder.append_line(&format!("let {} = payload.message;", BINDINGS.message));
        builder.append_empty_line();
        builder.append_line(&format!("if let Some(index) = {}.find('#') {{", BINDINGS.reason));
        builder.indented(|b| {
            b.append_line(&format!(
                "{reason} = {reason}[index + 1..].to_string();",
                reason = BINDINGS.reason
            ));
        });
        builder.append_line("}");
        BINDINGS
    }

    fn emit_additional_decode_branches(
        &self,
        builder: &mut FileBuilder,
        error_types: &[ErrorIdentity],
        bindings: IdentityBindings,
    ) {
        if Self::injects_access_denied(error_types) {
            builder.append_line(&format!(
                "ACCESS_DENIED_IDENTITY => Self::AccessDenied {{ message: {} }},",
                bindings.message
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsgen_define::ContentType;

    fn delegate(content_type: ContentType) -> AwsModelErrorsDelegate {
        AwsModelErrorsDelegate::new(ClientAttributes {
            content_type,
            api_version: "2012-11-05".to_string(),
            service: "sqs".to_string(),
            target: None,
            global_endpoint: None,
        })
    }

    #[test]
    fn injects_access_denied_only_when_undeclared() {
        let undeclared = vec![ErrorIdentity::new("ThrottlingException")];
        let declared = vec![ErrorIdentity::new("AccessDenied")];

        assert!(AwsModelErrorsDelegate::injects_access_denied(&undeclared));
        assert!(!AwsModelErrorsDelegate::injects_access_denied(&declared));

        let delegate = delegate(ContentType::Json);
        assert_eq!(delegate.additional_case_count(&undeclared), 1);
        assert_eq!(delegate.additional_case_count(&declared), 0);
    }

    #[test]
    fn declared_access_denied_adds_nothing() {
        let declared = vec![ErrorIdentity::new("AccessDenied")];
        let delegate = delegate(ContentType::Json);
        let mut builder = FileBuilder::new();
        delegate.emit_additional_error_identities(&mut builder, &declared);
        delegate.emit_additional_error_cases(&mut builder, &declared);
        delegate.emit_additional_decode_branches(&mut builder, &declared, BINDINGS);

        assert_eq!(builder.finish().unwrap(), "");
    }

    #[test]
    fn xml_payload_uses_code_and_message() {
        let mut builder = FileBuilder::new();
        delegate(ContentType::QueryXml).emit_coding_keys(&mut builder, &[]);
        let code = builder.finish().unwrap();

        assert!(code.contains("#[serde(rename = \"Code\")]"));
        assert!(code.contains("#[serde(rename = \"Message\", default)]"));
    }

    #[test]
    fn json_payload_uses_type_and_message() {
        let mut builder = FileBuilder::new();
        delegate(ContentType::Json).emit_coding_keys(&mut builder, &[]);
        let code = builder.finish().unwrap();

        assert!(code.contains("#[serde(rename = \"__type\")]"));
        assert!(code.contains("#[serde(rename = \"message\", default)]"));
    }

    #[test]
    fn identity_extraction_strips_namespace() {
        let mut builder = FileBuilder::new();
        let bindings = delegate(ContentType::Json).emit_identity_extraction(&mut builder);
        let code = builder.finish().unwrap();

        assert_eq!(bindings.reason, "error_reason");
        assert!(code.contains("if let Some(index) = error_reason.find('#') {"));
        assert!(code.contains("error_reason = error_reason[index + 1..].to_string();"));
    }
}
