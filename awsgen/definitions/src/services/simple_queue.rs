//! Simple Queue Service.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "sqs".to_string(),
        api_version: "2012-11-05".to_string(),
        base_name: "SimpleQueue".to_string(),
        content_type: ContentType::QueryXml,
        endpoint_prefix: "sqs".to_string(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
