//! Tier 2: identifier policy and key coercion

use crate::test_utils::{init_tracing, rec, row_json, users};
use hades::{ErrorKind, IdPolicy, RowId, Table, TableOptions, Upserted, Value};
use serde_json::json;

fn legacy_users() -> Table {
    init_tracing();
    Table::with_options("User", TableOptions::new().id_policy(IdPolicy::Falsy))
}

#[test]
fn default_policy_keeps_zero_and_empty_string() {
    let mut t = users();
    assert_eq!(t.options().id_policy, IdPolicy::Explicit);

    assert_eq!(t.insert_row(rec(json!({"id": 0}))).unwrap(), RowId::Int(0));
    assert_eq!(t.insert_row(rec(json!({"id": ""}))).unwrap(), RowId::from(""));
    assert_eq!(t.len(), 2);
    assert_eq!(t.last_id(), 2);
}

#[test]
fn falsy_policy_auto_assigns_zero_and_empty_string() {
    let mut t = legacy_users();

    assert_eq!(t.insert_row(rec(json!({"id": 0, "n": "a"}))).unwrap(), RowId::Int(1));
    assert_eq!(t.insert_row(rec(json!({"id": "", "n": "b"}))).unwrap(), RowId::Int(2));
    assert_eq!(row_json(&t, 1), json!({"id": 1, "n": "a"}));
    assert_eq!(row_json(&t, 2), json!({"id": 2, "n": "b"}));
    assert!(!t.contains_row(0));
}

#[test]
fn upsert_with_falsy_id_inserts_under_legacy_policy() {
    let mut t = legacy_users();
    let outcome = t.upsert_row(rec(json!({"id": 0, "n": "a"}))).unwrap();
    assert!(outcome.is_inserted());
    assert_eq!(outcome.id(), &RowId::Int(1));
}

#[test]
fn numeric_strings_address_integer_rows() {
    let mut t = users();
    t.insert_row(rec(json!({"name": "a"}))).unwrap();

    assert!(t.contains_row("1"));
    t.update_row("1", rec(json!({"name": "b"}))).unwrap();
    assert_eq!(t.get_row(1).unwrap().get("name"), Some(&Value::from("b")));

    let err = t.insert_row(rec(json!({"id": "1"}))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn non_canonical_numeric_strings_are_distinct_keys() {
    let mut t = users();
    t.insert_row(rec(json!({"id": 1}))).unwrap();
    t.insert_row(rec(json!({"id": "01"}))).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.row_ids(), vec![RowId::Int(1), RowId::from("01")]);
}

#[test]
fn integral_float_ids_are_integers() {
    let mut t = users();
    let id = t.insert_row(rec(json!({"id": 4.0}))).unwrap();
    assert_eq!(id, RowId::Int(4));
    assert_eq!(t.get_row(4).unwrap().id(), Some(&Value::Int(4)));
}

#[test]
fn bool_and_fractional_ids_are_string_keys() {
    let mut t = users();

    assert_eq!(t.insert_row(rec(json!({"id": 1.5}))).unwrap(), RowId::from("1.5"));
    assert_eq!(t.insert_row(rec(json!({"id": true}))).unwrap(), RowId::from("true"));
    assert_eq!(
        t.insert_row(rec(json!({"id": 1e19}))).unwrap(),
        RowId::from("10000000000000000000")
    );
    assert_eq!(t.len(), 3);
    assert_eq!(t.last_id(), 3);

    assert_eq!(row_json(&t, "1.5"), json!({"id": "1.5"}));
    assert!(t.contains_row("true"));

    // the printed form and the original value address the same row
    let err = t.insert_row(rec(json!({"id": "1.5"}))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let outcome = t.upsert_row(rec(json!({"id": true, "n": 1}))).unwrap();
    assert_eq!(outcome, Upserted::Updated(RowId::from("true")));
}

#[test]
fn unusable_ids_are_implementation_errors() {
    let mut t = users();
    for bad in [json!({"nested": 1}), json!([1])] {
        let err = t.insert_row(rec(json!({"id": bad}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Implementation);
        assert_eq!(err.kind().name(), "HadesImplementationError");
    }
    assert!(t.is_empty());
    assert_eq!(t.last_id(), 0);
}

#[test]
fn options_size_the_table() {
    let t = Table::with_options("Big", TableOptions::new().initial_capacity(4096));
    assert_eq!(t.options().initial_capacity, 4096);
    assert!(t.is_empty());
}
