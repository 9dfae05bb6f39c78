//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (RequiredVersion)
//! - terraform.rs: Terraform (*.tf) parser
//! - scan.rs: directory scanning

pub mod scan;
pub mod terraform;
pub mod traits;
pub mod types;

pub use scan::{ScanError, scan_directory};
pub use terraform::TerraformParser;
pub use traits::{ParseError, Parser};
pub use types::RequiredVersion;
