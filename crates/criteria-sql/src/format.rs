//! Text helpers for leaf fragments and value lists.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PAREN_PADDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\()\s+|\s+(\))").expect("paren padding pattern is valid"));

/// Normalizes the whitespace of an expression fragment.
///
/// Trims both ends, collapses every whitespace run (newlines included) into a
/// single space, then drops the space after an opening parenthesis and the
/// space before a closing one. The result is a fixed point: normalizing it
/// again returns the same string.
///
/// # Example
///
/// ```
/// use criteria_sql::normalize;
///
/// let fragment = "id in   \n  ( select id\n from t )  ";
/// assert_eq!(normalize(fragment), "id in (select id from t)");
/// ```
pub fn normalize(fragment: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(fragment.trim(), " ");
    PAREN_PADDING.replace_all(&collapsed, "$1$2").into_owned()
}

/// Renders values as a single-quoted SQL tuple.
///
/// Each value is formatted with [`Display`], wrapped in single quotes and
/// separated by `", "`. An empty input renders as `()`.
///
/// # Example
///
/// ```
/// use criteria_sql::quoted_tuple;
///
/// assert_eq!(quoted_tuple([1, 2, 3]), "('1', '2', '3')");
/// assert_eq!(quoted_tuple(Vec::<String>::new()), "()");
/// ```
pub fn quoted_tuple<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let quoted: Vec<String> = values
        .into_iter()
        .map(|value| format!("'{}'", value))
        .collect();
    format!("({})", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_collapses() {
        assert_eq!(normalize(" id='1'"), "id='1'");
        assert_eq!(normalize("  name='a'   "), "name='a'");
        assert_eq!(normalize("a \t\n  b"), "a b");
    }

    #[test]
    fn normalize_tightens_parens() {
        assert_eq!(normalize("( a )"), "(a)");
        assert_eq!(normalize("f(  x,  y  )"), "f(x, y)");
        assert_eq!(normalize("( )"), "()");
        assert_eq!(
            normalize("(select age from Person where\n  (code in ('1', '2'))\n)"),
            "(select age from Person where (code in ('1', '2')))"
        );
    }

    #[test]
    fn normalize_keeps_inner_text() {
        assert_eq!(
            normalize("abs(case when q=0 then 1 else q end)> 0"),
            "abs(case when q=0 then 1 else q end)> 0"
        );
    }

    #[test]
    fn normalize_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n "), "");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        for sample in ["  ( a  (b ) )  ", "x\n\n)", "(\n", "a ( ) b"] {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "sample {:?}", sample);
        }
    }

    #[test]
    fn quoted_tuple_formats() {
        assert_eq!(quoted_tuple(["1", "2", "3"]), "('1', '2', '3')");
        assert_eq!(quoted_tuple(["only"]), "('only')");
        assert_eq!(quoted_tuple(Vec::<&str>::new()), "()");
        assert_eq!(quoted_tuple([true, false]), "('true', 'false')");
    }
}
