//! Terraform-style version constraint parsing
//!
//! Supports the `required_version` constraint syntax:
//! - `1.2.3`, `= 1.2.3` - exact version
//! - `!= 1.2.3` - exclude a version
//! - `> 1.2.3`, `>= 1.2.3`, `< 1.2.3`, `<= 1.2.3` - comparisons
//! - `~> 1.2`, `~> 1.2.3` - pessimistic: >= operand, major.minor fixed
//! - `~> 1` - pessimistic: >= 1.0.0, major fixed
//!
//! Comma-separated predicates must all hold.

use std::fmt;
use std::str::FromStr;

use semver::{Comparator, Op};

use crate::version::error::MalformedConstraintError;
use crate::version::semver::{Version, operand_floor, parse_operand};

/// Comparison operator of a single predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` or no operator
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `~>`
    Pessimistic,
}

impl Operator {
    /// Returns the textual form of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Look up an operator token. The empty token means `=`.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "" | "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Gte),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Lte),
            "~>" => Some(Operator::Pessimistic),
            _ => None,
        }
    }

    /// Closest semver comparator operator; `!=` is matched as the negation of `=`
    fn comparator_op(self) -> Op {
        match self {
            Operator::Eq | Operator::Ne => Op::Exact,
            Operator::Gt => Op::Greater,
            Operator::Gte => Op::GreaterEq,
            Operator::Lt => Op::Less,
            Operator::Lte => Op::LessEq,
            Operator::Pessimistic => Op::Tilde,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `operator version` requirement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub operator: Operator,
    /// Operand as written; `minor` and `patch` are `None` when omitted
    pub operand: Comparator,
}

impl Predicate {
    pub fn new(operator: Operator, mut operand: Comparator) -> Self {
        operand.op = operator.comparator_op();
        Self { operator, operand }
    }

    /// The operand with omitted components set to zero
    pub fn floor(&self) -> Version {
        operand_floor(&self.operand)
    }

    /// Parse one trimmed, comma-free segment such as `>= 1.2.0` or `~>1.2`
    fn parse(segment: &str) -> Result<Self, MalformedConstraintError> {
        // The operator token runs up to the first digit or whitespace
        let split_at = segment
            .find(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .unwrap_or(segment.len());
        let (token, operand) = segment.split_at(split_at);

        let operator =
            Operator::from_token(token).ok_or_else(|| MalformedConstraintError::UnknownOperator {
                segment: segment.to_string(),
                operator: token.to_string(),
            })?;

        let operand = parse_operand(operand, operator.comparator_op()).map_err(|source| {
            MalformedConstraintError::InvalidVersion {
                segment: segment.to_string(),
                source,
            }
        })?;

        Ok(Self { operator, operand })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand.major)?;
        if let Some(minor) = self.operand.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = self.operand.patch {
            write!(f, ".{patch}")?;
        }
        Ok(())
    }
}

/// Conjunction of predicates, kept in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    predicates: Vec<Predicate>,
}

impl Constraint {
    /// Parse a comma-separated constraint expression.
    ///
    /// Empty or whitespace-only input yields an empty constraint, which
    /// matches every version.
    pub fn parse(text: &str) -> Result<Self, MalformedConstraintError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let predicates = text
            .split(',')
            .map(str::trim)
            .map(|segment| {
                if segment.is_empty() {
                    Err(MalformedConstraintError::EmptySegment {
                        input: text.to_string(),
                    })
                } else {
                    Predicate::parse(segment)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl FromStr for Constraint {
    type Err = MalformedConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}
