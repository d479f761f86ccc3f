//! Security Token Service.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "sts".to_string(),
        api_version: "2011-06-15".to_string(),
        base_name: "SecurityToken".to_string(),
        content_type: ContentType::QueryXml,
        endpoint_prefix: "sts".to_string(),
        target_prefix: None,
        global_endpoint: Some("sts.amazonaws.com".to_string()),
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
