//! Simple Notification Service.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "sns".to_string(),
        api_version: "2010-03-31".to_string(),
        base_name: "SimpleNotification".to_string(),
        content_type: ContentType::QueryXml,
        endpoint_prefix: "sns".to_string(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
