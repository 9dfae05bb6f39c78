//! HashiCorp releases registry implementation

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_RELEASES_URL, FETCH_TIMEOUT_MS};
use crate::version::error::RegistryError;
use crate::version::filter::ReleaseSet;
use crate::version::registry::Registry;
use crate::version::semver::Version;

/// Response from `https://releases.hashicorp.com/<product>/index.json`
#[derive(Debug, Deserialize)]
struct ProductIndex {
    versions: HashMap<String, serde_json::Value>,
}

/// Registry implementation for the HashiCorp releases site
pub struct HashiCorpRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HashiCorpRegistry {
    /// Creates a new HashiCorpRegistry with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("tf-version/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HashiCorpRegistry {
    fn default() -> Self {
        Self::new(
            DEFAULT_RELEASES_URL,
            Duration::from_millis(FETCH_TIMEOUT_MS),
        )
    }
}

#[async_trait::async_trait]
impl Registry for HashiCorpRegistry {
    async fn fetch_releases(&self, product: &str) -> Result<ReleaseSet, RegistryError> {
        let url = format!("{}/{}/index.json", self.base_url, product);
        debug!("Fetching releases: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(product.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Releases site returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let index: ProductIndex = response.json().await.map_err(|e| {
            warn!("Failed to parse releases index: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        // Pre-releases (1.6.0-beta1) and enterprise builds (1.2.3+ent) are skipped
        let releases: ReleaseSet = index
            .versions
            .keys()
            .filter_map(|key| match Version::parse(key) {
                Ok(version) => Some(version),
                Err(_) => {
                    debug!("Skipping non-stable release {}", key);
                    None
                }
            })
            .collect();

        debug!("Found {} releases for {}", releases.len(), product);

        Ok(releases)
    }
}
