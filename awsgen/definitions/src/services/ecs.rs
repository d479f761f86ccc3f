//! Elastic Container Service.

use awsgen_define::{ContentType, ServiceModelDetails};

use crate::default_http_client_configuration;

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "ecs".to_string(),
        api_version: "2014-11-13".to_string(),
        base_name: "ElasticContainer".to_string(),
        content_type: ContentType::Json,
        endpoint_prefix: "ecs".to_string(),
        target_prefix: Some("AmazonEC2ContainerServiceV20141113".to_string()),
        global_endpoint: None,
        model_override: None,
        http_client_configuration: default_http_client_configuration(),
        sign_all_headers: false,
    }
}
