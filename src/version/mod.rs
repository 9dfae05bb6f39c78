//! Version layer: constraint parsing, matching and release filtering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│ ReleaseSet  │────▶│   filter    │
//! │  (fetch)    │     │  (versions) │     │ (newest 1st)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲
//! ┌─────────────┐     ┌─────────────┐            │
//! │ Constraint  │────▶│   Matcher   │────────────┘
//! │  (parse)    │     │ (predicate) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`](self::semver): `MAJOR.MINOR.PATCH` version type over the `semver` crate
//! - [`constraint`]: constraint expression parser
//! - [`matcher`]: matching a version against predicates
//! - [`filter`]: release set and filtering
//! - [`registry`]: Registry trait for fetching releases from remote sources
//! - [`registries`]: Concrete registry implementations
//! - [`error`]: Error types for parsing and registry operations

pub mod constraint;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod registries;
pub mod registry;
pub mod semver;

pub use constraint::{Constraint, Operator, Predicate};
pub use error::{MalformedConstraintError, MalformedVersionError, RegistryError};
pub use filter::{ReleaseSet, filter, select};
pub use matcher::{VersionMatcher, matches};
pub use self::semver::Version;
