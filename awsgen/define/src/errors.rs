//! Errors raised while validating service definitions and models.

use thiserror::Error;

use crate::http_client::RetryBehavior;

/// A service definition or model that cannot be generated from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// The same identity is listed as both retriable and unretriable.
    #[error("Error identity '{0}' is listed as both retriable and unretriable")]
    ConflictingRetryOverride(String),

    /// An override sits in the set the configured default never consults.
    #[error(
        "Error identity '{identity}' is overridden in a set that is ignored when the default retry behavior is '{default_behavior}'"
    )]
    InertRetryOverride {
        identity: String,
        default_behavior: RetryBehavior,
    },

    /// Two declared errors normalize to the same name.
    #[error("Error identity '{0}' is declared more than once")]
    DuplicateErrorIdentity(String),

    /// A declared error would generate a case the error type already carries.
    #[error("Error identity '{0}' generates a reserved error case")]
    ReservedErrorVariant(String),

    /// Two declared errors generate the same identity constant.
    #[error("Error identities '{first}' and '{second}' both generate the constant '{constant}'")]
    IdentityConstantCollision {
        constant: String,
        first: String,
        second: String,
    },

    /// Two services would generate the same type and crate names.
    #[error("Base name '{0}' is used by more than one service")]
    DuplicateBaseName(String),
}
