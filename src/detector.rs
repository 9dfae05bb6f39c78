//! Detection coordinator
//!
//! Groups the parser and registry components that work together to turn a
//! configuration directory into a list of compatible releases.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ReleasesConfig;
use crate::parser::scan::{ScanError, scan_directory};
use crate::parser::terraform::TerraformParser;
use crate::parser::traits::Parser;
use crate::parser::types::RequiredVersion;
use crate::version::constraint::Constraint;
use crate::version::error::{MalformedConstraintError, RegistryError};
use crate::version::filter::filter;
use crate::version::registries::HashiCorpRegistry;
use crate::version::registry::Registry;
use crate::version::semver::Version;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Constraint(#[from] MalformedConstraintError),

    #[error("Failed to fetch releases: {0}")]
    Registry(#[from] RegistryError),

    #[error("No releases published for {0}")]
    NoReleases(String),
}

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Where the constraint came from; `None` when nothing declared one
    pub source: Option<RequiredVersion>,
    pub constraint: Constraint,
    /// Matching releases, newest first
    pub matching: Vec<Version>,
}

impl Detection {
    /// Newest release satisfying the constraint
    pub fn selected(&self) -> Option<&Version> {
        self.matching.first()
    }
}

pub struct Detector {
    parser: Arc<dyn Parser>,
    registry: Arc<dyn Registry>,
    product: String,
}

impl Detector {
    pub fn new(parser: Arc<dyn Parser>, registry: Arc<dyn Registry>, product: &str) -> Self {
        Self {
            parser,
            registry,
            product: product.to_string(),
        }
    }

    /// Find the constraint that applies to `dir`.
    ///
    /// The first declaration in file name order wins; later ones are reported
    /// and ignored.
    pub fn locate(&self, dir: &Path) -> Result<Option<RequiredVersion>, DetectError> {
        let mut found = scan_directory(dir, self.parser.as_ref())?.into_iter();
        let Some(first) = found.next() else {
            return Ok(None);
        };

        for ignored in found.filter(|other| other.constraint != first.constraint) {
            warn!(
                "Ignoring required_version {:?} in {} (using {:?} from {})",
                ignored.constraint,
                ignored.path.display(),
                first.constraint,
                first.path.display()
            );
        }

        Ok(Some(first))
    }

    /// Scan `dir`, parse its constraint and match it against the published releases
    pub async fn detect(&self, dir: &Path) -> Result<Detection, DetectError> {
        let source = self.locate(dir)?;
        let constraint = match &source {
            Some(required) => Constraint::parse(&required.constraint)?,
            None => Constraint::default(),
        };
        self.resolve(source, constraint).await
    }

    /// Match an already parsed constraint against the published releases
    pub async fn resolve(
        &self,
        source: Option<RequiredVersion>,
        constraint: Constraint,
    ) -> Result<Detection, DetectError> {
        let releases = self.registry.fetch_releases(&self.product).await?;
        if releases.is_empty() {
            return Err(DetectError::NoReleases(self.product.clone()));
        }
        info!("Fetched {} {} releases", releases.len(), self.product);

        let matching = filter(&releases, &constraint);
        debug!(
            "{} of {} releases satisfy {:?}",
            matching.len(),
            releases.len(),
            constraint.to_string()
        );

        Ok(Detection {
            source,
            constraint,
            matching,
        })
    }
}

/// Create the default detector: Terraform files checked against the HashiCorp releases site
pub fn create_default_detector(config: &ReleasesConfig) -> Detector {
    Detector::new(
        Arc::new(TerraformParser::new()),
        Arc::new(HashiCorpRegistry::new(&config.base_url, config.timeout())),
        &config.product,
    )
}
