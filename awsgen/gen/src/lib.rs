//! awsgen code generator library.
//!
//! Generates an AWS client package from pre-parsed service models. For each
//! configured service the package gets two crates:
//!
//! - `<service>-model`, holding the service's error enum with a decoder for
//!   AWS error payloads
//! - `<service>-client`, holding a client that signs, dispatches, and
//!   retries every operation of the service, in blocking and async form
//!
//! ## Modules
//!
//! - [`codegen`] - Client and error file generation
//! - [`file_builder`] - Indentation-aware text buffer used by all emitters
//! - [`cargo_gen`] - Cargo manifests for the generated package
//! - [`fetch`] - Fetching the model repository
//! - [`provider`] - Loading service models
//! - [`orchestrator`] - The full render-then-write run
//! - [`output`] - Validation and atomic file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use awsgen_definitions::all_services;
//! use awsgen_gen::fetch::GitModelFetcher;
//! use awsgen_gen::orchestrator::{GenerationSettings, Orchestrator};
//!
//! let orchestrator = Orchestrator::new(all_services(), GitModelFetcher, GenerationSettings::default());
//! let files = orchestrator.run(Path::new("generated")).unwrap();
//! println!("wrote {} files", files.len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For a service with base name `SimpleQueue` and a `SendMessage` operation:
//!
//! ```text
//! // simple-queue-model
//! pub enum SimpleQueueError { ThrottlingException { message: Option<String> }, ... }
//!
//! // simple-queue-client
//! pub trait SimpleQueueClientProtocol {
//!     fn send_message_sync(&self, input: SendMessageRequest) -> Result<SendMessageResult, SimpleQueueError>;
//!     async fn send_message(&self, input: SendMessageRequest) -> Result<SendMessageResult, SimpleQueueError>;
//! }
//!
//! pub struct SimpleQueueClient { ... }
//! ```

pub mod cargo_gen;
pub mod codegen;
pub mod errors;
pub mod fetch;
pub mod file_builder;
pub mod orchestrator;
pub mod output;
pub mod provider;

#[cfg(test)]
mod test_utils;
