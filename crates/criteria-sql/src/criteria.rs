//! The criteria tree.
//!
//! A [`Criteria`] is one of four shapes:
//!
//! - [`Criteria::Empty`]: nothing, dropped wherever it appears
//! - [`Criteria::Leaf`]: a pre-formed boolean fragment such as `"id = '1'"`
//! - [`Criteria::Group`]: an ordered list of criteria joined by one operator
//! - [`Criteria::Record`]: field/value pairs expanded into `key='value'` and
//!   `key in (...)` clauses
//!
//! Trees are usually built with the constructors and `From` conversions
//! below, or decoded from JSON with [`Criteria::from_json`].

use crate::op::{resolve_operator, Operator};
use crate::value::{FieldValue, Scalar};

/// Field name reserved for a record's join operator.
pub const OPERATOR_FIELD: &str = "operator";

/// A node in a criteria tree.
///
/// # Example
///
/// ```
/// use criteria_sql::{serialize, Criteria, Record};
///
/// let criteria = Criteria::any([
///     Criteria::from("quantity = 0"),
///     Criteria::from(Record::new().field("productId", vec!["a", "b"])),
/// ]);
///
/// assert_eq!(
///     serialize(&criteria),
///     "((quantity = 0) OR (((productId in ('a', 'b')))))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Criteria {
    /// Absent value; contributes nothing.
    #[default]
    Empty,
    /// Opaque boolean fragment, emitted after whitespace normalization.
    Leaf(String),
    /// Operator-joined list of nested criteria.
    Group(Group),
    /// Field/value pairs expanded into equality and membership clauses.
    Record(Record),
}

impl Criteria {
    /// Creates a leaf fragment.
    pub fn leaf(fragment: impl Into<String>) -> Self {
        Criteria::Leaf(fragment.into())
    }

    /// Creates a group with no explicit operator.
    ///
    /// The serializer's default operator (AND unless configured) joins it.
    pub fn group<I, C>(items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        Criteria::Group(Group::from_items(None, items))
    }

    /// Creates a group joined with AND.
    pub fn all<I, C>(items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        Criteria::Group(Group::from_items(Some(Operator::And), items))
    }

    /// Creates a group joined with OR.
    pub fn any<I, C>(items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        Criteria::Group(Group::from_items(Some(Operator::Or), items))
    }
}

/// An ordered list of criteria joined by a single operator.
///
/// `operator` is `None` when no operator was given; the serializer then uses
/// its configured default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    /// Explicit join operator, if any.
    pub operator: Option<Operator>,
    /// Nested criteria, in output order.
    pub items: Vec<Criteria>,
}

impl Group {
    /// Creates an empty group with no explicit operator.
    pub fn new() -> Self {
        Group::default()
    }

    /// Creates an empty group joined with AND.
    pub fn all() -> Self {
        Group::new().with_operator(Operator::And)
    }

    /// Creates an empty group joined with OR.
    pub fn any() -> Self {
        Group::new().with_operator(Operator::Or)
    }

    fn from_items<I, C>(operator: Option<Operator>, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        Group {
            operator,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the join operator.
    #[must_use]
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Appends a criteria node.
    #[must_use]
    pub fn push(mut self, item: impl Into<Criteria>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends a criteria node only if the option is `Some`.
    #[must_use]
    pub fn push_option<C: Into<Criteria>>(self, item: Option<C>) -> Self {
        match item {
            Some(item) => self.push(item),
            None => self,
        }
    }

    /// Returns `true` if the group holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Field/value pairs expanded into clauses.
///
/// Fields keep insertion order, which is the order their clauses are
/// emitted in. The reserved [`OPERATOR_FIELD`] never becomes a field: setting
/// it selects the join operator instead.
///
/// # Example
///
/// ```
/// use criteria_sql::{serialize, Criteria, Operator, Record};
///
/// let record = Record::new()
///     .operator(Operator::Or)
///     .field("address", "1")
///     .field("lang", "zig");
///
/// assert_eq!(
///     serialize(&Criteria::from(record)),
///     "((address='1') OR (lang='zig'))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    operator: Operator,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty record joined with AND.
    pub fn new() -> Self {
        Record::default()
    }

    /// Sets the join operator.
    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    /// Appends a field.
    ///
    /// The key may be a plain column name or any raw fragment, e.g.
    /// `"select age from Person where code"`. A key equal to
    /// [`OPERATOR_FIELD`] resolves the operator from a string value
    /// (`"OR"` selects OR, anything else AND) and adds no field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Appends a field only if the option is `Some`.
    #[must_use]
    pub fn field_option<V: Into<FieldValue>>(
        self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub(crate) fn insert(&mut self, key: String, value: FieldValue) {
        if key == OPERATOR_FIELD {
            let token = match &value {
                FieldValue::Scalar(Scalar::String(s)) => Some(s.as_str()),
                _ => None,
            };
            self.operator = resolve_operator(token);
        } else {
            self.fields.push((key, value));
        }
    }

    /// Returns the resolved join operator.
    pub fn join_operator(&self) -> Operator {
        self.operator
    }

    /// Iterates over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl From<&str> for Criteria {
    fn from(fragment: &str) -> Self {
        Criteria::Leaf(fragment.to_string())
    }
}

impl From<String> for Criteria {
    fn from(fragment: String) -> Self {
        Criteria::Leaf(fragment)
    }
}

impl From<Group> for Criteria {
    fn from(group: Group) -> Self {
        Criteria::Group(group)
    }
}

impl From<Record> for Criteria {
    fn from(record: Record) -> Self {
        Criteria::Record(record)
    }
}

impl<C: Into<Criteria>> From<Vec<C>> for Criteria {
    fn from(items: Vec<C>) -> Self {
        Criteria::group(items)
    }
}

impl<C: Into<Criteria>> From<Option<C>> for Criteria {
    fn from(item: Option<C>) -> Self {
        item.map_or(Criteria::Empty, Into::into)
    }
}
