//! Elastic Compute Cloud.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "ec2".to_string(),
        api_version: "2016-11-15".to_string(),
        base_name: "ElasticComputeCloud".to_string(),
        content_type: ContentType::QueryXml,
        endpoint_prefix: "ec2".to_string(),
        target_prefix: None,
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
