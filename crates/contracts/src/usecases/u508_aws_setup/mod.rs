pub mod error;
pub mod request;
pub mod response;

pub use error::SetupError;
pub use request::{AwsCredentials, SetupRequest};
pub use response::{parse_setup_response, SetupErrorBody, SetupResponse};

use crate::usecases::common::UseCaseMetadata;

/// Backend route that generates and applies the Terraform configuration
pub const SETUP_ENDPOINT: &str = "/api/setup";

pub struct AwsSetup;

impl UseCaseMetadata for AwsSetup {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "aws_setup"
    }

    fn display_name() -> &'static str {
        "AWS API Gateway Setup"
    }

    fn description() -> &'static str {
        "Generate and apply Terraform for an API Gateway described by an OpenAPI specification"
    }
}
