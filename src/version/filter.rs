//! Release filtering against a constraint

use std::collections::HashSet;

use crate::version::constraint::Constraint;
use crate::version::matcher::VersionMatcher;
use crate::version::semver::Version;

/// The set of published versions known for a product
///
/// Built once from a release source and never mutated afterwards.
/// Duplicates collapse on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    versions: HashSet<Version>,
}

impl ReleaseSet {
    pub fn new(versions: impl IntoIterator<Item = Version>) -> Self {
        Self {
            versions: versions.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }

    /// Greatest release in the set
    pub fn latest(&self) -> Option<Version> {
        self.versions.iter().max().cloned()
    }
}

impl FromIterator<Version> for ReleaseSet {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Return every release accepted by `matcher`, newest first.
pub fn filter<M>(releases: &ReleaseSet, matcher: &M) -> Vec<Version>
where
    M: VersionMatcher + ?Sized,
{
    let mut matching: Vec<Version> = releases
        .iter()
        .filter(|version| matcher.matches(version))
        .cloned()
        .collect();
    matching.sort_unstable_by(|a, b| b.cmp(a));
    matching
}

/// Greatest release satisfying `constraint`
pub fn select(releases: &ReleaseSet, constraint: &Constraint) -> Option<Version> {
    releases
        .iter()
        .filter(|version| constraint.matches(version))
        .max()
        .cloned()
}
