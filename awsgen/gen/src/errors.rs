//! Error types for the awsgen generator.

use awsgen_define::DefinitionError;
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An operation cannot be dispatched because its model lacks an HTTP
    /// verb or URL. Generation of the whole run stops.
    #[error(
        "Unable to create a client operation for '{operation}' that doesn't have a HTTP verb or path"
    )]
    MissingHttpBinding { operation: String },

    /// Invalid service definition or model.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// Emitters left the indentation depth unbalanced.
    #[error("Unbalanced indentation in generated file (depth {depth} at end of file)")]
    UnbalancedIndentation { depth: usize },

    /// Generated code is not valid Rust.
    #[error("Generated code for '{file}' is invalid: {reason}")]
    InvalidGeneratedCode { file: String, reason: String },

    /// Fetching the model repository failed.
    #[error("Failed to fetch models at '{tag}': {stderr}")]
    FetchFailed { tag: String, stderr: String },

    /// Failed to launch an external tool.
    #[error("Failed to run '{program}': {source}")]
    ProcessError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A service model file could not be read.
    #[error("Failed to read service model '{path}': {source}")]
    ModelReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A service model file is not a valid pre-parsed model.
    #[error("Failed to parse service model '{path}': {source}")]
    ModelParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
