//! One module per generated service.

pub mod cloudwatch;
pub mod dynamodb;
pub mod ec2;
pub mod ecs;
pub mod rds;
pub mod s3;
pub mod simple_queue;
pub mod simple_workflow;
pub mod sns;
pub mod step_functions;
pub mod sts;
