//! Semantic version type shared by the constraint parser and the release filter
//!
//! Only plain `MAJOR.MINOR.PATCH` versions are supported. Pre-release and
//! build metadata suffixes (`1.2.3-beta1`, `1.2.3+ent`) are rejected, so
//! Terraform alpha/beta/rc builds never enter a release set.

use std::fmt;
use std::str::FromStr;

use semver::{Comparator, Op};

use crate::version::error::MalformedVersionError;

/// A `MAJOR.MINOR.PATCH` version without pre-release or build metadata
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a strict three-component version.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, MalformedVersionError> {
        let malformed = || MalformedVersionError::new(text);
        let version = semver::Version::parse(text.trim()).map_err(|_| malformed())?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(malformed());
        }
        Ok(Self(version))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = MalformedVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Parse a constraint operand with one to three components.
///
/// The components that were not written stay `None` in the returned
/// comparator, whose operator is set to `op`.
///
/// Examples:
/// - "1" -> major 1, minor None, patch None
/// - "1.2" -> major 1, minor Some(2), patch None
/// - "1.2.3" -> major 1, minor Some(2), patch Some(3)
pub fn parse_operand(text: &str, op: Op) -> Result<Comparator, MalformedVersionError> {
    let malformed = || MalformedVersionError::new(text);
    let trimmed = text.trim();

    // Comparator syntax also allows wildcards and pre-release tags
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(malformed());
    }

    let mut comparator = Comparator::parse(&format!("={trimmed}")).map_err(|_| malformed())?;
    comparator.op = op;
    Ok(comparator)
}

/// Version an operand denotes, with unwritten components set to zero
pub fn operand_floor(operand: &Comparator) -> Version {
    Version::new(
        operand.major,
        operand.minor.unwrap_or(0),
        operand.patch.unwrap_or(0),
    )
}
