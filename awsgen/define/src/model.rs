//! Pre-parsed service model types.
//!
//! A [`ServiceModel`] is what the generator consumes for one service: the
//! operations it exposes (with their HTTP bindings) and the error identities
//! it declares. Models are loaded once per service and discarded after the
//! service's files are rendered.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::errors::DefinitionError;
use crate::naming::{lower_to_upper_camel_case, to_upper_snake_case, upper_to_lower_camel_case};

/// HTTP verbs an operation can be bound to.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use awsgen_define::HttpVerb;
///
/// assert_eq!(HttpVerb::from_str("POST").unwrap(), HttpVerb::Post);
/// assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

/// The HTTP binding and shape references of a single operation.
///
/// Both `http_verb` and `http_url` are optional in the model, but an
/// operation missing either cannot be dispatched and will be rejected by
/// client generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescription {
    #[serde(default)]
    pub http_verb: Option<HttpVerb>,
    /// URL template, e.g. `/{Bucket}/{Key+}` or `/`.
    #[serde(default)]
    pub http_url: Option<String>,
    #[serde(default)]
    pub input_shape_name: Option<String>,
    #[serde(default)]
    pub output_shape_name: Option<String>,
}

impl OperationDescription {
    /// Creates a description bound to `verb` and `url` with no shapes.
    pub fn new(verb: HttpVerb, url: impl Into<String>) -> Self {
        Self {
            http_verb: Some(verb),
            http_url: Some(url.into()),
            input_shape_name: None,
            output_shape_name: None,
        }
    }

    /// Sets the input shape name.
    pub fn with_input(mut self, shape: impl Into<String>) -> Self {
        self.input_shape_name = Some(shape.into());
        self
    }

    /// Sets the output shape name.
    pub fn with_output(mut self, shape: impl Into<String>) -> Self {
        self.output_shape_name = Some(shape.into());
        self
    }
}

/// Strips an optional `namespace#` prefix from an error identity.
///
/// Service errors may be namespace-qualified (`com.amazonaws.sqs#QueueDoesNotExist`).
/// Everything up to and including the first `#` is removed. The generated
/// decode routine applies the same rule to discriminator values at runtime.
///
/// ## Examples
///
/// ```
/// use awsgen_define::canonical_error_identity;
///
/// assert_eq!(canonical_error_identity("ns#ThrottlingException"), "ThrottlingException");
/// assert_eq!(canonical_error_identity("ThrottlingException"), "ThrottlingException");
/// ```
pub fn canonical_error_identity(raw: &str) -> &str {
    match raw.find('#') {
        Some(index) => &raw[index + 1..],
        None => raw,
    }
}

/// One distinct error condition declared by a service model.
///
/// Serialized as the bare declared name; the normalized name is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ErrorIdentity {
    /// The name as it appears on the wire (`ThrottlingException`).
    pub declared_name: String,
    /// Lower camel case form (`throttlingException`), unique per model.
    pub normalized_name: String,
}

impl ErrorIdentity {
    /// Builds an identity from a declared (possibly namespace-qualified) name.
    pub fn new(declared: &str) -> Self {
        let declared_name = canonical_error_identity(declared).to_string();
        let normalized_name = upper_to_lower_camel_case(&declared_name);
        Self {
            declared_name,
            normalized_name,
        }
    }

    /// Enum case name generated for this identity (`ThrottlingException`).
    pub fn variant_name(&self) -> String {
        lower_to_upper_camel_case(&self.normalized_name)
    }

    /// Identity constant generated for this identity
    /// (`THROTTLING_EXCEPTION_IDENTITY`).
    pub fn identity_constant(&self) -> String {
        format!("{}_IDENTITY", to_upper_snake_case(&self.variant_name()))
    }
}

impl From<String> for ErrorIdentity {
    fn from(declared: String) -> Self {
        Self::new(&declared)
    }
}

impl From<ErrorIdentity> for String {
    fn from(identity: ErrorIdentity) -> Self {
        identity.declared_name
    }
}

/// Enum cases every generated error type may carry besides the declared ones.
pub const RESERVED_ERROR_VARIANTS: [&str; 2] = ["UnrecognizedError", "ValidationError"];

/// A pre-parsed service model.
///
/// Operations are kept in a `BTreeMap` so every traversal is ordered by
/// operation name. Error types keep their declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    #[serde(default)]
    pub operations: BTreeMap<String, OperationDescription>,
    #[serde(default)]
    pub error_types: Vec<ErrorIdentity>,
}

impl ServiceModel {
    /// Returns true if any declared identity normalizes to `normalized_name`.
    pub fn declares_error(&self, normalized_name: &str) -> bool {
        self.error_types
            .iter()
            .any(|error| error.normalized_name == normalized_name)
    }

    /// Appends errors not already declared, preserving the given order.
    pub fn append_errors<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            let identity = ErrorIdentity::new(name);
            if !self.declares_error(&identity.normalized_name) {
                self.error_types.push(identity);
            }
        }
    }

    /// Checks that every declared error generates distinct, legal names.
    ///
    /// ## Errors
    ///
    /// - `DefinitionError::DuplicateErrorIdentity` if two identities share a
    ///   normalized name
    /// - `DefinitionError::ReservedErrorVariant` if an identity would generate
    ///   one of [`RESERVED_ERROR_VARIANTS`]
    /// - `DefinitionError::IdentityConstantCollision` if two identities map to
    ///   the same identity constant (`DBInstanceNotFound`, `DbInstanceNotFound`)
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = BTreeSet::new();
        let mut constants: BTreeMap<String, &str> = BTreeMap::new();
        for error in &self.error_types {
            if !seen.insert(error.normalized_name.as_str()) {
                return Err(DefinitionError::DuplicateErrorIdentity(
                    error.declared_name.clone(),
                ));
            }

            let variant = error.variant_name();
            if RESERVED_ERROR_VARIANTS.contains(&variant.as_str()) {
                return Err(DefinitionError::ReservedErrorVariant(
                    error.declared_name.clone(),
                ));
            }

            let constant = error.identity_constant();
            if let Some(first) = constants.get(&constant) {
                return Err(DefinitionError::IdentityConstantCollision {
                    constant,
                    first: (*first).to_string(),
                    second: error.declared_name.clone(),
                });
            }
            constants.insert(constant, error.declared_name.as_str());
        }
        Ok(())
    }
}
