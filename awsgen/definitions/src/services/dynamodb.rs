//! DynamoDB.
//!
//! Throughput and request-limit errors are transient and are retried even
//! though modeled errors fail by default.

use awsgen_define::{ContentType, HttpClientConfiguration, RetryBehavior, ServiceModelDetails};

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "dynamodb".to_string(),
        api_version: "2012-08-10".to_string(),
        base_name: "DynamoDB".to_string(),
        content_type: ContentType::Json,
        endpoint_prefix: "dynamodb".to_string(),
        target_prefix: Some("DynamoDB_20120810".to_string()),
        global_endpoint: None,
        model_override: None,
        http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Fail)
            .with_retriable([
                "InternalServerError",
                "ProvisionedThroughputExceededException",
                "RequestLimitExceeded",
            ]),
        sign_all_headers: false,
    }
}
