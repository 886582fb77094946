use criteria_sql::{serialize, serialize_json, Criteria, Operator, Record};
use insta::assert_snapshot;

#[test]
fn test_snapshot_mixed_tree() {
    let criteria = Criteria::group([
        Criteria::leaf("tenantId = 'acme'"),
        Criteria::any([
            Criteria::group(["quantity = 0", "productId is null"]),
            Record::new()
                .operator(Operator::Or)
                .field("status", vec!["open", "pending"])
                .field("priority", 1)
                .into(),
        ]),
        Criteria::leaf(
            "createdAt >
                (select max(createdAt) from Audit
                 where kind = 'close'
                )",
        ),
    ]);

    assert_snapshot!(serialize(&criteria), @"((tenantId = 'acme') AND (((quantity = 0) AND (productId is null)) OR (((status in ('open', 'pending')) OR (priority='1')))) AND (createdAt > (select max(createdAt) from Audit where kind = 'close')))");
}

#[test]
fn test_snapshot_json_payment_filter() {
    let output = serialize_json(
        r#"[
            "paymentStatusId != ''",
            null,
            ["OR", {"paymentStatusId not": ["ENUM_all", "ENUM_done"]}, "  isRefund = 't'  "]
        ]"#,
    )
    .unwrap();

    assert_snapshot!(output, @"((paymentStatusId != '') AND ((((paymentStatusId not in ('ENUM_all', 'ENUM_done')))) OR (isRefund = 't')))");
}
