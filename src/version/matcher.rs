//! Version matching abstraction

use crate::version::constraint::{Constraint, Operator, Predicate};
use crate::version::semver::Version;

/// Anything that can accept or reject a single version
///
/// Implemented by a single [`Predicate`] and by a whole [`Constraint`]
/// (the conjunction of its predicates).
pub trait VersionMatcher {
    fn matches(&self, version: &Version) -> bool;
}

/// Check a version against a constraint. An empty constraint matches everything.
pub fn matches(constraint: &Constraint, version: &Version) -> bool {
    constraint.matches(version)
}

impl VersionMatcher for Predicate {
    fn matches(&self, version: &Version) -> bool {
        // semver reads a partial `> 1.2` as `>= 1.3.0`; Terraform pads it to `> 1.2.0`
        let floor = self.floor();
        match self.operator {
            Operator::Eq => *version == floor,
            Operator::Ne => *version != floor,
            Operator::Gt => *version > floor,
            Operator::Gte => *version >= floor,
            Operator::Lt => *version < floor,
            Operator::Lte => *version <= floor,
            // ~> 1 only pins the major; ~> 1.2 and ~> 1.2.0 pin major.minor
            Operator::Pessimistic => self.operand.matches(version.as_semver()),
        }
    }
}

impl VersionMatcher for Constraint {
    fn matches(&self, version: &Version) -> bool {
        self.predicates().iter().all(|p| p.matches(version))
    }
}
