//! Code generation for service clients and model errors.
//!
//! - [`generator`] - Per-service context and the fixed file layouts
//! - [`delegate`] - Traits through which targets customize those layouts
//! - [`client`] - AWS client delegate
//! - [`error`] - AWS errors delegate
//! - [`operation`] - Query and body operation bodies
//! - [`retry`] - Retry classification of error identities

pub mod client;
pub mod delegate;
pub mod error;
pub mod generator;
pub mod operation;
pub mod retry;

pub use client::AwsClientDelegate;
pub use error::AwsModelErrorsDelegate;
pub use generator::{
    ServiceModelCodeGenerator, error_identity_constant, error_variant_name, operation_function_name,
};
pub use retry::RetryClassification;
