//! Boolean operators used to join clauses.
//!
//! The [`Operator`] enum names the two ways sibling clauses can be combined.
//! Two parsing entry points exist with different strictness:
//!
//! - [`resolve_operator`] is permissive: anything that is not exactly `"OR"`
//!   means AND. Records use it for their `operator` field.
//! - [`Operator::from_token`] only recognizes the exact tokens `"AND"` and
//!   `"OR"`. Groups use it to decide whether their first element is an
//!   operator or an ordinary leaf.

use std::str::FromStr;

use crate::error::CriteriaError;

/// Boolean operator joining the clauses of a group or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// All clauses must hold.
    #[default]
    And,
    /// At least one clause must hold.
    Or,
}

impl Operator {
    /// Recognizes a leading group token.
    ///
    /// Matching is exact and case sensitive, so `"or"` is not an operator.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            _ => None,
        }
    }

    /// Returns the SQL keyword for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }

    /// Returns the space-padded separator placed between joined clauses.
    pub fn separator(self) -> &'static str {
        match self {
            Operator::And => " AND ",
            Operator::Or => " OR ",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_token(s).ok_or_else(|| CriteriaError::UnknownOperator(s.to_string()))
    }
}

/// Resolves an optional operator token, defaulting to AND.
///
/// Returns [`Operator::Or`] only when the token is exactly `"OR"`. Absent,
/// misspelled, or lowercase tokens all resolve to [`Operator::And`].
pub fn resolve_operator(token: Option<&str>) -> Operator {
    match token {
        Some("OR") => Operator::Or,
        _ => Operator::And,
    }
}
