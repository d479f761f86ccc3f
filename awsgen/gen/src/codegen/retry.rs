//! Retry classification of a service's error identities.
//!
//! Every declared identity ends up in exactly one of three buckets:
//! explicitly retriable, explicitly unretriable, or handled by the default
//! behavior. Only the override set matching the configured default is
//! consulted; the other set never changes the outcome.
//!
//! The generated predicate is a single `match` whose arms are, in order:
//! the retriable bucket, the unretriable bucket, then a `_` arm returning the
//! default. Empty buckets produce no arm, and the `_` arm is only emitted
//! when some case still needs it. When nothing is overridden the predicate
//! collapses to the constant default.

use awsgen_define::{ErrorIdentity, HttpClientConfiguration, RetryBehavior};
use tracing::warn;

use crate::codegen::generator::error_variant_name;
use crate::file_builder::FileBuilder;

/// Declared identities partitioned by retry outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryClassification {
    /// Enum case names retried regardless of the default, sorted.
    pub retriable: Vec<String>,
    /// Enum case names never retried regardless of the default, sorted.
    pub unretriable: Vec<String>,
    /// Cases falling through to the default, including implicit ones.
    pub default_case_count: usize,
    pub default_behavior: RetryBehavior,
}

impl RetryClassification {
    /// Partitions `error_types` under `config`.
    ///
    /// `implicit_cases` is the number of error enum cases without a declared
    /// identity; they always take the default behavior. Overrides naming
    /// identities the model does not declare are logged and ignored.
    pub fn classify(
        error_types: &[ErrorIdentity],
        config: &HttpClientConfiguration,
        implicit_cases: usize,
    ) -> Self {
        let default_behavior = config.known_errors_default_retry_behavior;
        let overrides = config.active_overrides();

        let mut overridden = Vec::new();
        let mut default_case_count = implicit_cases;
        for identity in error_types {
            if overrides.contains(&identity.declared_name) {
                overridden.push(error_variant_name(identity));
            } else {
                default_case_count += 1;
            }
        }
        overridden.sort();

        for name in overrides {
            if !error_types.iter().any(|e| &e.declared_name == name) {
                warn!(identity = %name, "retry override names an undeclared error");
            }
        }

        let (retriable, unretriable) = match default_behavior {
            RetryBehavior::Fail => (overridden, Vec::new()),
            RetryBehavior::Retry => (Vec::new(), overridden),
        };

        Self {
            retriable,
            unretriable,
            default_case_count,
            default_behavior,
        }
    }

    /// Whether the predicate reduces to the constant default.
    pub fn is_constant(&self) -> bool {
        self.retriable.is_empty() && self.unretriable.is_empty()
    }
}

/// Emits the predicate body for a value named `self` of type `error_type`.
pub fn emit_retriable_match(builder: &mut FileBuilder, error_type: &str, classification: &RetryClassification) {
    if classification.is_constant() {
        builder.append_line(&classification.default_behavior.is_retriable().to_string());
        return;
    }

    builder.append_line("match self {");
    builder.indented(|b| {
        if !classification.retriable.is_empty() {
            b.append_line(&format!("{} => true,", arm_pattern(error_type, &classification.retriable)));
        }
        if !classification.unretriable.is_empty() {
            b.append_line(&format!(
                "{} => false,",
                arm_pattern(error_type, &classification.unretriable)
            ));
        }
        if classification.default_case_count > 0 {
            b.append_line(&format!("_ => {},", classification.default_behavior.is_retriable()));
        }
    });
    builder.append_line("}");
}

fn arm_pattern(error_type: &str, variants: &[String]) -> String {
    variants
        .iter()
        .map(|variant| format!("{error_type}::{variant} {{ .. }}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Emits the private `RetriableError` trait with its two implementations.
///
/// The typed implementation classifies the service's own error enum. The
/// generic one covers any boxed error: it downcasts to the service error
/// when possible and otherwise answers with `retry_on_unknown_error`.
pub fn emit_retriable_extensions(
    builder: &mut FileBuilder,
    error_type: &str,
    classification: &RetryClassification,
    retry_on_unknown_error: bool,
) {
    builder.append_line("/// Retry classification of failed invocations.");
    builder.append_line("trait RetriableError {");
    builder.indented(|b| b.append_line("fn is_retriable(&self) -> bool;"));
    builder.append_line("}");
    builder.append_empty_line();

    builder.append_line(&format!("impl RetriableError for {error_type} {{"));
    builder.indented(|b| {
        b.append_line("fn is_retriable(&self) -> bool {");
        b.indented(|b| emit_retriable_match(b, error_type, classification));
        b.append_line("}");
    });
    builder.append_line("}");
    builder.append_empty_line();

    builder.append_line("impl RetriableError for dyn std::error::Error + Send + Sync + 'static {");
    builder.indented(|b| {
        b.append_line("fn is_retriable(&self) -> bool {");
        b.indented(|b| {
            b.append_line(&format!(
                "if let Some(typed_error) = self.downcast_ref::<{error_type}>() {{"
            ));
            b.indented(|b| b.append_line("typed_error.is_retriable()"));
            b.append_line("} else {");
            b.indented(|b| b.append_line(&retry_on_unknown_error.to_string()));
            b.append_line("}");
        });
        b.append_line("}");
    });
    builder.append_line("}");
    builder.append_empty_line();
}
