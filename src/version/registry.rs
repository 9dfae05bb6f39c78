//! Registry trait for fetching published releases

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::filter::ReleaseSet;

/// Trait for fetching the published releases of a product
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every stable release of a product
    ///
    /// # Arguments
    /// * `product` - The product name (e.g., "terraform")
    ///
    /// # Returns
    /// * `Ok(ReleaseSet)` - Distinct `MAJOR.MINOR.PATCH` releases, unordered
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_releases(&self, product: &str) -> Result<ReleaseSet, RegistryError>;
}
