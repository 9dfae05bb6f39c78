//! Detect the Terraform version a configuration requires and list the
//! published releases that satisfy it.

pub mod config;
pub mod detector;
pub mod logging;
pub mod parser;
pub mod version;
