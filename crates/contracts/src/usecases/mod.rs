pub mod common;
pub mod u508_aws_setup;
