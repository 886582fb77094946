//! Rendering of criteria trees into boolean expression strings.
//!
//! Rendering rules, applied recursively:
//!
//! | Node | Output |
//! |------|--------|
//! | `Empty`, blank `Leaf` | nothing |
//! | `Leaf` | `(<normalized fragment>)` |
//! | `Group` | `(<item> OP <item> ...)`, nothing when every item is empty |
//! | `Record` | its clauses rendered as a group joined by the record's operator |
//!
//! A record nested inside a group gains one extra pair of parentheses
//! around its group rendering, so `[a, {x: "1"}]` becomes
//! `((a) AND (((x='1'))))`. At the top level a record is not re-wrapped.
//!
//! Serialization never fails. There is no recursion limit; callers feeding
//! untrusted input should bound its depth themselves.

use std::fmt;

use crate::criteria::{Criteria, Group, Record};
use crate::format::{normalize, quoted_tuple};
use crate::op::Operator;
use crate::value::FieldValue;

/// Configurable criteria renderer.
///
/// The only setting is the operator that joins groups carrying no explicit
/// operator. Records always join with their own operator.
///
/// # Example
///
/// ```
/// use criteria_sql::{Criteria, Operator, Serializer};
///
/// let criteria = Criteria::group(["a = 1", "b = 2"]);
///
/// assert_eq!(Serializer::new().serialize(&criteria), "((a = 1) AND (b = 2))");
/// assert_eq!(
///     Serializer::with_default_operator(Operator::Or).serialize(&criteria),
///     "((a = 1) OR (b = 2))"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Serializer {
    default_operator: Operator,
}

impl Serializer {
    /// Creates a serializer that joins operator-less groups with AND.
    pub fn new() -> Self {
        Serializer::default()
    }

    /// Creates a serializer with the given default group operator.
    pub fn with_default_operator(default_operator: Operator) -> Self {
        Serializer { default_operator }
    }

    /// Returns the operator used for groups without an explicit one.
    pub fn default_operator(&self) -> Operator {
        self.default_operator
    }

    /// Renders a criteria tree.
    ///
    /// Returns an empty string when the tree contributes no clause.
    pub fn serialize(&self, criteria: &Criteria) -> String {
        match criteria {
            Criteria::Empty => String::new(),
            Criteria::Leaf(fragment) => self.leaf(fragment).unwrap_or_default(),
            Criteria::Group(group) => self.group(group).unwrap_or_default(),
            Criteria::Record(record) => self.record(record).unwrap_or_default(),
        }
    }

    /// Renders one item of a group, or `None` if it contributes nothing.
    fn item(&self, criteria: &Criteria) -> Option<String> {
        match criteria {
            Criteria::Empty => None,
            Criteria::Leaf(fragment) => self.leaf(fragment),
            Criteria::Group(group) => self.group(group),
            Criteria::Record(record) => {
                self.record(record).map(|clause| format!("({})", clause))
            }
        }
    }

    fn leaf(&self, fragment: &str) -> Option<String> {
        let normalized = normalize(fragment);
        if normalized.is_empty() {
            tracing::trace!("dropping blank leaf");
            return None;
        }
        Some(format!("({})", normalized))
    }

    fn group(&self, group: &Group) -> Option<String> {
        let operator = group.operator.unwrap_or(self.default_operator);
        let clauses: Vec<String> = group
            .items
            .iter()
            .filter_map(|item| self.item(item))
            .collect();
        join(operator, clauses)
    }

    fn record(&self, record: &Record) -> Option<String> {
        let clauses: Vec<String> = record
            .fields()
            .filter_map(|(key, value)| field_clause(key, value))
            .filter_map(|clause| self.leaf(&clause))
            .collect();
        join(record.join_operator(), clauses)
    }
}

/// Builds the raw clause text for one record field.
fn field_clause(key: &str, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Null => {
            tracing::trace!(field = key, "skipping null field");
            None
        }
        FieldValue::Scalar(scalar) => Some(format!("{}='{}'", key, scalar)),
        FieldValue::List(values) => Some(format!("{} in {}", key, quoted_tuple(values))),
    }
}

fn join(operator: Operator, clauses: Vec<String>) -> Option<String> {
    if clauses.is_empty() {
        tracing::trace!(%operator, "dropping group without clauses");
        return None;
    }
    Some(format!("({})", clauses.join(operator.separator())))
}

/// Renders a criteria tree with the default configuration.
///
/// # Example
///
/// ```
/// use criteria_sql::{serialize, Criteria};
///
/// let criteria = Criteria::any([
///     Criteria::group(["a>0", "b>0"]),
///     Criteria::group(["c='t'", "d>0"]),
/// ]);
///
/// assert_eq!(
///     serialize(&criteria),
///     "(((a>0) AND (b>0)) OR ((c='t') AND (d>0)))"
/// );
/// ```
pub fn serialize(criteria: &Criteria) -> String {
    Serializer::new().serialize(criteria)
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
