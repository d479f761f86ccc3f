//! awsgen Definition Library
//!
//! Types describing what the `awsgen` generator consumes: pre-parsed service
//! models and the static configuration of each generated service.
//!
//! ## Core Types
//!
//! - [`ServiceModel`] - Operations and declared error identities of one service
//! - [`OperationDescription`] - HTTP binding and shape references of an operation
//! - [`ErrorIdentity`] - A declared error with its normalized name
//! - [`ClientAttributes`] - Content type and endpoint attributes of a client
//! - [`HttpClientConfiguration`] - Retry policy baked into a generated client
//! - [`ServiceModelDetails`] - Static configuration of one generated service
//! - [`CodeGenerationCustomizations`] - Settings shared by a service's files
//!
//! ## Examples
//!
//! ```
//! use awsgen_define::{ErrorIdentity, HttpVerb, OperationDescription, ServiceModel};
//!
//! let mut model = ServiceModel::default();
//! model.operations.insert(
//!     "SendMessage".to_string(),
//!     OperationDescription::new(HttpVerb::Post, "/")
//!         .with_input("SendMessageRequest")
//!         .with_output("SendMessageResult"),
//! );
//! model.error_types.push(ErrorIdentity::new("ThrottlingException"));
//!
//! assert_eq!(model.error_types[0].normalized_name, "throttlingException");
//! ```

pub mod attributes;
pub mod details;
pub mod errors;
pub mod http_client;
pub mod model;
pub mod naming;
pub mod prelude;

pub use attributes::{
    AsyncResultType, ClientAttributes, ContentType, DiscriminatorFields, InputLocation,
    InvokeType, PayloadType,
};
pub use details::{
    CodeGenerationCustomizations, ErrorDeclaration, ModelOverride, ServiceModelDetails,
    validate_service_details,
};
pub use errors::DefinitionError;
pub use http_client::{HttpClientConfiguration, RetryBehavior};
pub use model::{
    ErrorIdentity, HttpVerb, OperationDescription, RESERVED_ERROR_VARIANTS, ServiceModel,
    canonical_error_identity,
};
