//! Simple Workflow Service.
//!
//! Most SWF faults are transient, so modeled errors retry by default and the
//! faults describing caller mistakes are listed as unretriable.

use awsgen_define::{ContentType, HttpClientConfiguration, RetryBehavior, ServiceModelDetails};

pub fn service_model_details() -> ServiceModelDetails {
    ServiceModelDetails {
        service_name: "swf".to_string(),
        api_version: "2012-01-25".to_string(),
        base_name: "SimpleWorkflow".to_string(),
        content_type: ContentType::Json,
        endpoint_prefix: "swf".to_string(),
        target_prefix: Some("SimpleWorkflowService".to_string()),
        global_endpoint: None,
        model_override: None,
        http_client_configuration: HttpClientConfiguration::new(true, RetryBehavior::Retry)
            .with_unretriable([
                "DomainAlreadyExistsFault",
                "OperationNotPermittedFault",
                "TypeAlreadyExistsFault",
                "UnknownResourceFault",
            ]),
        sign_all_headers: false,
    }
}
