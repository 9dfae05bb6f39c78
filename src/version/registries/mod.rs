//! Registry implementations for fetching published releases

pub mod hashicorp;

pub use hashicorp::HashiCorpRegistry;
