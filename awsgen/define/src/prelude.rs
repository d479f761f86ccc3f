//! Convenient re-exports for writing service definitions.
//!
//! ## Examples
//!
//! ```
//! use awsgen_define::prelude::*;
//!
//! let config = HttpClientConfiguration::new(true, RetryBehavior::Fail)
//!     .with_retriable(["ThrottlingException"]);
//! assert!(config.validate().is_ok());
//! ```

pub use crate::attributes::{AsyncResultType, ClientAttributes, ContentType, InvokeType};
pub use crate::details::{
    CodeGenerationCustomizations, ErrorDeclaration, ModelOverride, ServiceModelDetails,
};
pub use crate::http_client::{HttpClientConfiguration, RetryBehavior};
pub use crate::model::{ErrorIdentity, HttpVerb, OperationDescription, ServiceModel};
