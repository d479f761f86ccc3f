//! Protocol attributes of a generated client.
//!
//! The content type of a service fixes two things the generator needs:
//! where request parameters go (query string or payload) and which payload
//! fields discriminate an error response.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Wire content type of a service.
///
/// `QueryXml` services send their input as query-string key/value pairs and
/// answer in XML; `Xml` and `Json` services carry their input in the payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ContentType {
    Json,
    Xml,
    QueryXml,
}

/// Where an operation's request parameters are encoded by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputLocation {
    Query,
    Body,
}

/// Payload family used for responses and error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PayloadType {
    Json,
    Xml,
}

/// The payload fields that identify an error and carry its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscriminatorFields {
    pub type_field: &'static str,
    pub message_field: &'static str,
}

impl ContentType {
    /// Default location of request parameters for this content type.
    pub fn default_input_location(self) -> InputLocation {
        match self {
            ContentType::QueryXml => InputLocation::Query,
            ContentType::Xml | ContentType::Json => InputLocation::Body,
        }
    }

    /// Payload family of this content type.
    pub fn payload_type(self) -> PayloadType {
        match self {
            ContentType::Xml | ContentType::QueryXml => PayloadType::Xml,
            ContentType::Json => PayloadType::Json,
        }
    }

    /// Name of the matching variant in the generated runtime's `ContentType`.
    pub fn runtime_variant(self) -> &'static str {
        match self {
            ContentType::Json => "Json",
            ContentType::Xml => "Xml",
            ContentType::QueryXml => "QueryXml",
        }
    }
}

impl PayloadType {
    /// Error discriminator fields for this payload family.
    ///
    /// ## Examples
    ///
    /// ```
    /// use awsgen_define::PayloadType;
    ///
    /// assert_eq!(PayloadType::Xml.discriminator_fields().type_field, "Code");
    /// assert_eq!(PayloadType::Json.discriminator_fields().type_field, "__type");
    /// ```
    pub fn discriminator_fields(self) -> DiscriminatorFields {
        match self {
            PayloadType::Xml => DiscriminatorFields {
                type_field: "Code",
                message_field: "Message",
            },
            PayloadType::Json => DiscriminatorFields {
                type_field: "__type",
                message_field: "message",
            },
        }
    }
}

/// Attributes of the client generated for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAttributes {
    pub content_type: ContentType,
    pub api_version: String,
    /// Signing name / endpoint prefix, e.g. `sqs`.
    pub service: String,
    /// JSON target prefix, e.g. `DynamoDB_20120810`.
    pub target: Option<String>,
    /// Endpoint used regardless of region, if the service has one.
    pub global_endpoint: Option<String>,
}

impl ClientAttributes {
    pub fn default_input_location(&self) -> InputLocation {
        self.content_type.default_input_location()
    }

    pub fn payload_discriminator_fields(&self) -> DiscriminatorFields {
        self.content_type.payload_type().discriminator_fields()
    }
}

/// How generated async operations are declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AsyncResultType {
    /// `async fn` returning the result directly.
    #[default]
    Native,
    /// Plain `fn` returning `futures::future::BoxFuture`, keeping the
    /// protocol trait object-safe.
    BoxFuture,
}

/// The calling convention of one generated operation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InvokeType {
    Blocking,
    Async,
}
