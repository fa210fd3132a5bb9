use chrono::NaiveDate;
use fintrack_core::currency::Amount;
use fintrack_core::ledger::{
    InstallmentPlan, PaymentMethod, Period, Transaction, TransactionKind, TransactionStatus,
};
use serde_json::Value;

fn sample() -> Transaction {
    Transaction::new(
        TransactionKind::Debt,
        "Car financing",
        "financing",
        Amount::from_minor(85_000),
        NaiveDate::from_ymd_opt(2024, 10, 10).unwrap(),
        InstallmentPlan::new(12, Period::Monthly).unwrap(),
    )
    .unwrap()
    .with_payment_method(PaymentMethod::Pix {
        holder_name: "Ana".into(),
        bank: "Banco A".into(),
        pix_key: "ana@example.com".into(),
        pix_holder_name: "Loja B".into(),
        pix_bank: "Banco B".into(),
    })
}

#[test]
fn wire_shape_matches_the_storage_collaborator() {
    let value = serde_json::to_value(sample()).unwrap();

    assert_eq!(value["kind"], Value::from("debt"));
    assert_eq!(value["date"], Value::from("2024-10-10"));
    assert_eq!(value["amount"], Value::from(85_000));
    assert_eq!(value["installments"]["total"], Value::from(12));
    assert_eq!(value["installments"]["current"], Value::from(1));
    assert_eq!(value["installments"]["period"], Value::from("monthly"));
    assert_eq!(value["payment_method"]["type"], Value::from("pix"));
    assert_eq!(value["status"], Value::from("pending"));
}

#[test]
fn round_trips_through_json() {
    let original = sample();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Transaction = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.id, original.id);
    assert_eq!(restored.kind, original.kind);
    assert_eq!(restored.amount, original.amount);
    assert_eq!(restored.date, original.date);
    assert_eq!(restored.installments, original.installments);
    assert_eq!(restored.payment_method, original.payment_method);
    assert_eq!(restored.status, original.status);
}

#[test]
fn card_method_uses_its_own_tag() {
    let txn = Transaction::new(
        TransactionKind::Bill,
        "Internet",
        "internet",
        Amount::from_minor(9_990),
        NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
        InstallmentPlan::single(Period::Monthly),
    )
    .unwrap()
    .with_payment_method(PaymentMethod::Card {
        holder_name: "Ana".into(),
        bank: "Banco A".into(),
        recipient_holder_name: "Provedora C".into(),
    });

    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(value["payment_method"]["type"], Value::from("card"));
    assert_eq!(
        value["payment_method"]["recipient_holder_name"],
        Value::from("Provedora C")
    );
}

#[test]
fn status_defaults_to_pending_when_absent() {
    let mut value = serde_json::to_value(sample()).unwrap();
    value.as_object_mut().unwrap().remove("status");
    value.as_object_mut().unwrap().remove("payment_method");
    let restored: Transaction = serde_json::from_value(value).unwrap();
    assert_eq!(restored.status, TransactionStatus::Pending);
    assert_eq!(restored.payment_method, None);
}
