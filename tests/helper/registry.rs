//! Registry test utilities

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use tf_version::detector::Detector;
use tf_version::parser::terraform::TerraformParser;
use tf_version::version::error::RegistryError;
use tf_version::version::filter::ReleaseSet;
use tf_version::version::registry::Registry;
use tf_version::version::semver::Version;

/// Mock registry for testing
pub struct MockRegistry {
    releases: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            releases: HashMap::new(),
        }
    }

    pub fn with_releases(mut self, product: &str, versions: Vec<&str>) -> Self {
        self.releases.insert(
            product.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_releases(&self, product: &str) -> Result<ReleaseSet, RegistryError> {
        match self.releases.get(product) {
            Some(versions) => Ok(versions
                .iter()
                .filter_map(|v| Version::parse(v).ok())
                .collect()),
            None => Err(RegistryError::NotFound(product.to_string())),
        }
    }
}

/// Create a terraform detector backed by a mock registry
pub fn create_test_detector(registry: MockRegistry) -> Detector {
    Detector::new(
        Arc::new(TerraformParser::new()),
        Arc::new(registry),
        "terraform",
    )
}

/// Create a temporary directory holding the given files
pub fn create_test_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        write_file(dir.path(), name, content);
    }
    dir
}

fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}
