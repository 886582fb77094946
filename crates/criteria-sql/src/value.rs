//! Value types held by record fields.
//!
//! A record field is either absent, a single [`Scalar`], or a list of
//! scalars. Scalars are rendered through their [`Display`](std::fmt::Display)
//! form, which is what ends up between the single quotes of an equality or
//! membership clause.

use std::fmt;

/// A scalar field value: string, number, or boolean.
///
/// # Example
///
/// ```
/// use criteria_sql::Scalar;
///
/// assert_eq!(Scalar::from("zig").to_string(), "zig");
/// assert_eq!(Scalar::from(42).to_string(), "42");
/// assert_eq!(Scalar::from(1.5).to_string(), "1.5");
/// assert_eq!(Scalar::from(true).to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value, emitted verbatim.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value, emitted as `true` / `false`.
    Bool(bool),
}

impl Scalar {
    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => n.fmt(f),
            Scalar::Bool(b) => b.fmt(f),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Integers keep their exact representation. Floats render the shortest
/// form that round-trips, so `1.0` renders as `1` and `0.5` as `0.5`;
/// magnitudes of `1e21` and above or below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`), and negative zero renders as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => fmt_float(*n, f),
        }
    }
}

fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let magnitude = n.abs();
    if n.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        };
    }
    write!(f, "{}", n)
}

/// The value side of a record field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value; the field produces no clause.
    #[default]
    Null,
    /// Single value, rendered as `key='value'`.
    Scalar(Scalar),
    /// List of values, rendered as `key in ('v1', 'v2')`.
    List(Vec<Scalar>),
}

impl FieldValue {
    /// Returns `true` if this field produces no clause.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// Conversions from primitive types

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

macro_rules! number_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n.into())
                }
            }

            impl From<$ty> for Scalar {
                fn from(n: $ty) -> Self {
                    Scalar::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64: i8, i16, i32, i64);
number_from!(U64: u8, u16, u32, u64);
number_from!(F64: f64);

// An f32 renders from its own shortest decimal form, not the widened f64 bits.
impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n.to_string().parse().unwrap_or_else(|_| f64::from(n)))
    }
}

impl From<f32> for Scalar {
    fn from(n: f32) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

macro_rules! field_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Scalar(value.into())
                }
            }
        )*
    };
}

field_value_from!(String, &str, bool, Number);
field_value_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, usize);

impl<T: Into<Scalar>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
