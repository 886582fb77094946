//! Public API coverage for the typed builders.

use criteria_sql::{
    normalize, quoted_tuple, resolve_operator, serialize, Criteria, CriteriaError, FieldValue,
    Group, Number, Operator, Record, Scalar, Serializer, OPERATOR_FIELD,
};

// ============================================================================
// Groups
// ============================================================================

#[test]
fn explicit_or_group() {
    let criteria = Criteria::any(["a = 1", "b = 2"]);
    assert_eq!(serialize(&criteria), "((a = 1) OR (b = 2))");
}

#[test]
fn group_builder_matches_constructor() {
    let built: Criteria = Group::any().push("a = 1").push("b = 2").into();
    assert_eq!(built, Criteria::any(["a = 1", "b = 2"]));
}

#[test]
fn optional_items_drop_cleanly() {
    let amount: Option<&str> = None;
    let criteria: Criteria = Group::all()
        .push("status != ''")
        .push_option(amount.map(|a| format!("amount > {}", a)))
        .push(Criteria::Empty)
        .into();
    assert_eq!(serialize(&criteria), "((status != ''))");
}

#[test]
fn vec_converts_to_implicit_group() {
    let criteria = Criteria::from(vec!["a", "b"]);
    assert_eq!(serialize(&criteria), "((a) AND (b))");
}

#[test]
fn deeply_nested_empty_groups_vanish() {
    let criteria = Criteria::group([
        Criteria::group([Criteria::any([Criteria::Empty])]),
        Criteria::all(Vec::<Criteria>::new()),
    ]);
    assert_eq!(serialize(&criteria), "");
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn record_clause_keys_may_be_fragments() {
    let record = Record::new()
        .operator(Operator::Or)
        .field("code", vec!["1", "2", "3"])
        .field("select age from Person where code", vec!["1", "2"]);
    assert_eq!(
        serialize(&record.into()),
        "((code in ('1', '2', '3')) OR (select age from Person where code in ('1', '2')))"
    );
}

#[test]
fn record_numbers_in_lists() {
    let record = Record::new().field("id", vec![1u64, 2, 3]);
    assert_eq!(serialize(&record.into()), "((id in ('1', '2', '3')))");
}

#[test]
fn record_operator_via_reserved_field() {
    let record = Record::new()
        .field("a", "1")
        .field(OPERATOR_FIELD, "OR")
        .field("b", "2");
    assert_eq!(serialize(&record.into()), "((a='1') OR (b='2'))");
}

#[test]
fn record_f32_values_render_their_own_digits() {
    let record = Record::new().field("rate", 0.1f32).field("ids", vec![0.1f32, 2.5]);
    assert_eq!(
        serialize(&record.into()),
        "((rate='0.1') AND (ids in ('0.1', '2.5')))"
    );
}

#[test]
fn record_values_are_normalized_like_fragments() {
    let record = Record::new().field("name", "  two   words ");
    assert_eq!(serialize(&record.into()), "((name=' two words '))");
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn helpers_are_exported() {
    assert_eq!(normalize("  a \n b "), "a b");
    assert_eq!(
        quoted_tuple(&[Scalar::from("x"), Scalar::from(2)]),
        "('x', '2')"
    );
    assert_eq!(resolve_operator(Some("OR")), Operator::Or);
    assert_eq!(resolve_operator(Some("AND")), Operator::And);
}

#[test]
fn field_value_shapes() {
    assert_eq!(FieldValue::from(true), FieldValue::Scalar(Scalar::Bool(true)));
    assert_eq!(
        FieldValue::from(-2i64),
        FieldValue::Scalar(Scalar::Number(Number::I64(-2)))
    );
    assert!(FieldValue::from(None::<i32>).is_null());
}

#[test]
fn serializer_default_operator() {
    let criteria = Criteria::group(["a", Criteria::all(["b", "c"]).to_string().as_str()]);
    assert_eq!(
        Serializer::with_default_operator(Operator::Or).serialize(&criteria),
        "((a) OR (((b) AND (c))))"
    );
    assert_eq!(Serializer::default().default_operator(), Operator::And);
}

#[test]
fn error_display() {
    let err = "XOR".parse::<Operator>().unwrap_err();
    assert!(matches!(err, CriteriaError::UnknownOperator(_)));
    assert_eq!(err.to_string(), "unknown operator 'XOR', expected AND or OR");
}

#[test]
fn types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Criteria>();
    assert_send_sync::<Serializer>();
    assert_send_sync::<CriteriaError>();
}
