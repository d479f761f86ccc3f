//! CloudWatch.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "monitoring".to_string(),
        api_version: "2010-08-01".to_string(),
        base_name: "CloudWatch".to_string(),
        content_type: ContentType::QueryXml,
        endpoint_prefix: "monitoring".to_string(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
