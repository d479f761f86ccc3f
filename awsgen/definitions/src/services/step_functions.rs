//! Step Functions.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "states".to_string(),
        api_version: "2016-11-23".to_string(),
        base_name: "StepFunctions".to_string(),
        content_type: ContentType::Json,
        endpoint_prefix: "states".to_string(),
        target_prefix: Some("AWSStepFunctions".to_string()),
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
