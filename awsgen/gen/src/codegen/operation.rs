//! Operation bodies for the two request encoding strategies.
//!
//! Query services wrap the input with the operation name and API version so
//! the runtime can encode it as query parameters. Body services hand the
//! input to the runtime as the request payload. Both strategies dispatch
//! through the same runtime call, retrying failures the client's
//! `RetriableError` implementation classifies as retriable.

use awsgen_define::{AsyncResultType, HttpVerb, InputLocation, InvokeType, OperationDescription};

use crate::codegen::delegate::OperationFunction;
use crate::errors::GeneratorError;
use crate::file_builder::FileBuilder;

/// Everything an operation body needs, resolved from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationInvocation<'a> {
    pub function: OperationFunction<'a>,
    pub http_verb: HttpVerb,
    pub http_url: &'a str,
    pub sign_all_headers: bool,
    pub async_result_type: AsyncResultType,
}

impl<'a> OperationInvocation<'a> {
    /// Resolves the HTTP binding of an operation.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::MissingHttpBinding` if the verb or the URL is
    /// missing.
    pub fn resolve(
        function: OperationFunction<'a>,
        description: &'a OperationDescription,
        sign_all_headers: bool,
        async_result_type: AsyncResultType,
    ) -> Result<Self, GeneratorError> {
        match (description.http_verb, description.http_url.as_deref()) {
            (Some(http_verb), Some(http_url)) => Ok(Self {
                function,
                http_verb,
                http_url,
                sign_all_headers,
                async_result_type,
            }),
            _ => Err(GeneratorError::MissingHttpBinding {
                operation: function.operation_name.to_string(),
            }),
        }
    }
}

/// Expression of the `http::Method` constant for a verb.
pub fn http_method(verb: HttpVerb) -> String {
    format!("http::Method::{verb}")
}

/// Emits the body of one operation function.
pub fn emit_operation_body(
    builder: &mut FileBuilder,
    location: InputLocation,
    invocation: &OperationInvocation<'_>,
) {
    let boxed = invocation.function.invoke_type == InvokeType::Async
        && invocation.async_result_type == AsyncResultType::BoxFuture;

    if boxed {
        builder.append_line("Box::pin(async move {");
        builder.inc_indent();
    }

    let function = &invocation.function;
    builder.append_line(&format!(
        "let invocation_context = self.invocation_context(\"{}\", {});",
        function.operation_name, invocation.sign_all_headers
    ));
    let input = if function.input_type.is_some() {
        "input"
    } else {
        "aws_client_http::NoInput"
    };
    match location {
        InputLocation::Query => builder.append_line(&format!(
            "let request_input = QueryWrapper::new({input}, \"{}\", &self.api_version);",
            function.operation_name
        )),
        InputLocation::Body => {
            builder.append_line(&format!("let request_input = BodyWrapper::new({input});"))
        }
    }
    builder.append_empty_line();

    let output = if function.output_type.is_some() {
        "with_output"
    } else {
        "without_output"
    };
    let (suffix, awaited) = match function.invoke_type {
        InvokeType::Blocking => ("_blocking", false),
        InvokeType::Async => ("", true),
    };

    builder.append_line("self.http_client");
    builder.indented(|b| {
        b.append_line(&format!(".execute_retriable_{output}{suffix}("));
        b.indented(|b| {
            b.append_line("&invocation_context,");
            b.append_line(&format!("\"{}\",", invocation.http_url));
            b.append_line(&format!("{},", http_method(invocation.http_verb)));
            b.append_line("request_input,");
            b.append_line("&self.retry_configuration,");
            b.append_line("|error| error.is_retriable(),");
        });
        b.append_line(")");
        if awaited {
            b.append_line(".await");
        }
    });

    if boxed {
        builder.dec_indent();
        builder.append_line("})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(invoke_type: InvokeType) -> OperationFunction<'static> {
        OperationFunction {
            operation_name: "SendMessage",
            invoke_type,
            input_type: Some("SendMessageRequest"),
            output_type: Some("SendMessageResult"),
        }
    }

    fn render(location: InputLocation, invocation: &OperationInvocation<'_>) -> String {
        let mut builder = FileBuilder::new();
        emit_operation_body(&mut builder, location, invocation);
        builder.finish().unwrap()
    }

    #[test]
    fn resolve_requires_verb_and_url() {
        let description = OperationDescription {
            http_verb: Some(HttpVerb::Post),
            ..OperationDescription::default()
        };
        let result = OperationInvocation::resolve(
            function(InvokeType::Async),
            &description,
            false,
            AsyncResultType::Native,
        );

        assert!(matches!(
            result,
            Err(GeneratorError::MissingHttpBinding { operation }) if operation == "SendMessage"
        ));
    }

    #[test]
    fn query_body_wraps_input_with_action() {
        let description = OperationDescription::new(HttpVerb::Post, "/");
        let invocation = OperationInvocation::resolve(
            function(InvokeType::Async),
            &description,
            false,
            AsyncResultType::Native,
        )
        .unwrap();
        let code = render(InputLocation::Query, &invocation);

        assert!(code.contains(
            "let request_input = QueryWrapper::new(input, \"SendMessage\", &self.api_version);"
        ));
        assert!(!code.contains("BodyWrapper"));
        assert!(code.contains(".execute_retriable_with_output("));
        assert!(code.contains("http::Method::POST,"));
        assert!(code.contains(".await"));
    }

    #[test]
    fn body_strategy_passes_input_as_payload() {
        let description = OperationDescription::new(HttpVerb::Put, "/{Bucket}/{Key+}");
        let invocation = OperationInvocation::resolve(
            function(InvokeType::Blocking),
            &description,
            true,
            AsyncResultType::Native,
        )
        .unwrap();
        let code = render(InputLocation::Body, &invocation);

        assert!(code.contains("let request_input = BodyWrapper::new(input);"));
        assert!(!code.contains("QueryWrapper"));
        assert!(code.contains("self.invocation_context(\"SendMessage\", true);"));
        assert!(code.contains(".execute_retriable_with_output_blocking("));
        assert!(code.contains("\"/{Bucket}/{Key+}\","));
        assert!(!code.contains(".await"));
    }

    #[test]
    fn missing_shapes_use_no_input_and_no_output() {
        let description = OperationDescription::new(HttpVerb::Delete, "/");
        let bare = OperationFunction {
            operation_name: "PurgeQueue",
            invoke_type: InvokeType::Async,
            input_type: None,
            output_type: None,
        };
        let invocation =
            OperationInvocation::resolve(bare, &description, false, AsyncResultType::Native).unwrap();
        let code = render(InputLocation::Body, &invocation);

        assert!(code.contains("BodyWrapper::new(aws_client_http::NoInput)"));
        assert!(code.contains(".execute_retriable_without_output("));
        assert!(code.contains("http::Method::DELETE,"));
    }

    #[test]
    fn box_future_wraps_async_body() {
        let description = OperationDescription::new(HttpVerb::Post, "/");
        let invocation = OperationInvocation::resolve(
            function(InvokeType::Async),
            &description,
            false,
            AsyncResultType::BoxFuture,
        )
        .unwrap();
        let code = render(InputLocation::Query, &invocation);

        assert!(code.starts_with("Box::pin(async move {\n"));
        assert!(code.ends_with("})\n"));
    }
}
