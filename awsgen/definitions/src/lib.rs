//! awsgen Service Definitions
//!
//! The static configuration list driving `awsgen`: which services are
//! generated, in what order, and with which retry policy. The definitions
//! use the primitives from `awsgen-define`.
//!
//! ## Examples
//!
//! ```
//! use awsgen_definitions::all_services;
//!
//! let services = all_services();
//! assert_eq!(services.len(), 11);
//! assert!(awsgen_define::validate_service_details(&services).is_ok());
//! ```

pub mod services;

use awsgen_define::{
    CodeGenerationCustomizations, HttpClientConfiguration, RetryBehavior, ServiceModelDetails,
};

/// Repository holding the pre-parsed service models.
pub const MODEL_REPOSITORY_URL: &str = "https://github.com/awsgen/service-models.git";

/// Tag of [`MODEL_REPOSITORY_URL`] the generated package is built from.
pub const MODEL_REPOSITORY_TAG: &str = "v1.19.9";

/// Banner placed at the top of every generated file.
pub const FILE_HEADER: &str = "\
// Copyright 2018-2019 Amazon.com, Inc. or its affiliates. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the \"License\").
// You may not use this file except in compliance with the License.
// A copy of the License is located at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// or in the \"license\" file accompanying this file. This file is distributed
// on an \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied. See the License for the specific language governing
// permissions and limitations under the License.
//";

/// Retry policy used by services without specific needs.
///
/// Unknown (transport-level) failures are retried; modeled errors are not.
pub fn default_http_client_configuration() -> HttpClientConfiguration {
    HttpClientConfiguration::new(true, RetryBehavior::Fail)
}

/// All generated services, in generation order.
pub fn all_services() -> Vec<ServiceModelDetails> {
    vec![
        services::ec2::service_model_details(),
        services::ecs::service_model_details(),
        services::s3::service_model_details(),
        services::simple_queue::service_model_details(),
        services::step_functions::service_model_details(),
        services::sts::service_model_details(),
        services::sns::service_model_details(),
        services::dynamodb::service_model_details(),
        services::simple_workflow::service_model_details(),
        services::cloudwatch::service_model_details(),
        services::rds::service_model_details(),
    ]
}

/// Builds the customizations for one service's generated files.
pub fn customizations_for(details: &ServiceModelDetails) -> CodeGenerationCustomizations {
    CodeGenerationCustomizations::new(FILE_HEADER, details.http_client_configuration.clone())
}
