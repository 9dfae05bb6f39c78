#![allow(dead_code)]

pub mod registry;

pub use registry::{MockRegistry, create_test_detector, create_test_dir};
