//! criteria-sql - Serialize nested filter criteria into SQL boolean expressions.
//!
//! Instead of concatenating `WHERE` fragments by hand, callers describe a
//! filter as a tree of fragments, groups, and field records, and render it
//! into one fully parenthesized expression:
//!
//! - **Leaf**: an opaque fragment such as `"abs(amount) > 0"`, whitespace
//!   normalized and wrapped in parentheses
//! - **Group**: nested criteria joined by `AND` (default) or `OR`
//! - **Record**: field/value pairs rendered as `key='value'` or
//!   `key in ('v1', 'v2')`
//!
//! Empty or blank nodes vanish at any depth without leaving stray operators
//! or `()` behind.
//!
//! # Quick Start
//!
//! ```rust
//! use criteria_sql::{serialize, Criteria, Operator, Record};
//!
//! let show_executed = false;
//!
//! let criteria = Criteria::group([
//!     Criteria::leaf("statusId != ''"),
//!     (!show_executed).then(|| Criteria::leaf("statusId != 'done'")).into(),
//!     Record::new()
//!         .operator(Operator::Or)
//!         .field("code", vec!["1", "2"])
//!         .field("lang", "zig")
//!         .into(),
//! ]);
//!
//! assert_eq!(
//!     serialize(&criteria),
//!     "((statusId != '') AND (statusId != 'done') AND (((code in ('1', '2')) OR (lang='zig'))))"
//! );
//! ```
//!
//! # Dynamic input
//!
//! Criteria assembled as JSON use a leading `"AND"`/`"OR"` string to pick a
//! group's operator and an `"operator"` key to pick a record's:
//!
//! ```rust
//! use criteria_sql::serialize_json;
//!
//! let sql = serialize_json(r#"["OR", ["a>0", "b>0"], ["c='t'", "d>0"]]"#).unwrap();
//! assert_eq!(sql, "(((a>0) AND (b>0)) OR ((c='t') AND (d>0)))");
//! ```
//!
//! # Limitations
//!
//! Fragments are never parsed or escaped. Values are quoted but not escaped,
//! so callers must sanitize anything user controlled. Records cannot nest
//! sub-selects: an object used as a field value produces no clause.

mod criteria;
mod error;
mod format;
mod json;
mod op;
mod serializer;
mod value;

// Re-export public API
pub use criteria::{Criteria, Group, Record, OPERATOR_FIELD};
pub use error::{CriteriaError, Result};
pub use format::{normalize, quoted_tuple};
pub use json::serialize_json;
pub use op::{resolve_operator, Operator};
pub use serializer::{serialize, Serializer};
pub use value::{FieldValue, Number, Scalar};
