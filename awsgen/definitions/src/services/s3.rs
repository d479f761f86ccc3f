//! Simple Storage Service.
//!
//! The S3 model omits several errors the service returns; they are added
//! through the model override so the generated client can classify them.

use awsgen_define::{
    ContentType, HttpClientConfiguration, ModelOverride, RetryBehavior, ServiceModelDetails,
};

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "s3".to_string(),
        api_version: "2006-03-01".to_string(),
        base_name: "S3".to_string(),
        content_type: ContentType::Xml,
        endpoint_prefix: "s3".to_string(),
        target_prefix: None,
        global_endpoint: Some("s3.amazonaws.com".to_string()),
        model_override: Some(ModelOverride {
            additional_errors: vec![
                "AccessDenied".to_string(),
                "InternalError".to_string(),
                "SlowDown".to_string(),
            ],
        }),
        http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Fail)
            .with_retriable(["InternalError", "SlowDown"]),
        sign_all_headers: true,
    }
}
