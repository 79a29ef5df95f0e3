//! Tier 1: documented table scenarios

use crate::test_utils::{rec, row_json, users};
use hades::{table_name_for, ErrorKind, Model, RowId, Table, Upserted};
use serde_json::json;

struct User;

impl Model for User {
    fn model_name() -> &'static str {
        "User"
    }
}

#[test]
fn user_model_maps_to_table_user() {
    assert_eq!(users().key(), "table_user");
    assert_eq!(Table::for_model::<User>().key(), "table_user");
    assert_eq!(table_name_for(User::model_name()), "table_user");
}

#[test]
fn sequential_inserts_assign_one_then_two() {
    let mut t = users();

    t.insert_row(rec(json!({"name": "a"}))).unwrap();
    assert_eq!(row_json(&t, 1), json!({"name": "a", "id": 1}));
    assert_eq!(t.last_id(), 1);

    t.insert_row(rec(json!({"name": "b"}))).unwrap();
    assert_eq!(row_json(&t, 2), json!({"name": "b", "id": 2}));
    assert_eq!(t.last_id(), 2);
}

#[test]
fn explicit_id_then_auto_id_drifts() {
    let mut t = users();
    t.insert_row(rec(json!({"id": 5, "name": "c"}))).unwrap();

    let before = t.last_id();
    let id = t.insert_row(rec(json!({"name": "d"}))).unwrap();
    assert_eq!(id, RowId::Int(before as i64 + 1));
    assert_eq!(id, RowId::Int(2));
    assert_eq!(row_json(&t, 5), json!({"id": 5, "name": "c"}));
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut t = users();
    t.insert_row(rec(json!({"id": 1, "name": "first"}))).unwrap();

    let err = t.insert_row(rec(json!({"id": 1, "name": "second"}))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Cannot insert new row with non-unique ID.");
    assert_eq!(row_json(&t, 1), json!({"id": 1, "name": "first"}));
}

#[test]
fn update_of_missing_row_fails_cleanly() {
    let mut t = users();
    t.insert_row(rec(json!({"name": "a"}))).unwrap();
    let snapshot: Vec<_> = t.rows().map(|(id, r)| (id.clone(), r.clone())).collect();

    let err = t.update_row(2, rec(json!({"name": "b"}))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let after: Vec<_> = t.rows().map(|(id, r)| (id.clone(), r.clone())).collect();
    assert_eq!(snapshot, after);
}

#[test]
fn upsert_updates_then_inserts() {
    let mut t = users();
    t.insert_row(rec(json!({"id": 1, "name": "a"}))).unwrap();

    let outcome = t.upsert_row(rec(json!({"id": 1, "name": "b"}))).unwrap();
    assert_eq!(outcome, Upserted::Updated(RowId::Int(1)));
    assert_eq!(row_json(&t, 1), json!({"id": 1, "name": "b"}));
    assert_eq!(t.last_id(), 1);

    let outcome = t.upsert_row(rec(json!({"id": 2, "name": "c"}))).unwrap();
    assert_eq!(outcome, Upserted::Inserted(RowId::Int(2)));
    assert_eq!(row_json(&t, 2), json!({"id": 2, "name": "c"}));
    assert_eq!(t.last_id(), 2);
}

#[test]
fn upsert_on_existing_row_matches_update() {
    let mut via_upsert = users();
    let mut via_update = users();
    for t in [&mut via_upsert, &mut via_update] {
        t.insert_row(rec(json!({"id": 3, "name": "a", "age": 1}))).unwrap();
    }

    let patch = json!({"id": 3, "age": 2});
    via_upsert.upsert_row(rec(patch.clone())).unwrap();
    via_update.update_row(3, rec(patch)).unwrap();

    assert_eq!(row_json(&via_upsert, 3), row_json(&via_update, 3));
    assert_eq!(via_upsert.last_id(), via_update.last_id());
}

#[test]
fn upsert_on_missing_row_matches_insert() {
    let mut via_upsert = users();
    let mut via_insert = users();

    let a = via_upsert.upsert_row(rec(json!({"name": "x"}))).unwrap();
    let b = via_insert.insert_row(rec(json!({"name": "x"}))).unwrap();

    assert_eq!(a.id(), &b);
    assert_eq!(row_json(&via_upsert, 1), row_json(&via_insert, 1));
    assert_eq!(via_upsert.last_id(), via_insert.last_id());
}

#[test]
fn delete_missing_row_is_silent() {
    let mut t = users();
    t.insert_row(rec(json!({"name": "a"}))).unwrap();

    assert!(t.delete_row(99).is_none());
    assert_eq!(t.len(), 1);
    assert_eq!(row_json(&t, 1), json!({"id": 1, "name": "a"}));
}

#[test]
fn delete_then_reinsert_same_explicit_id() {
    let mut t = users();
    t.insert_row(rec(json!({"id": "k", "v": 1}))).unwrap();
    assert!(t.delete_row("k").is_some());
    t.insert_row(rec(json!({"id": "k", "v": 2}))).unwrap();
    assert_eq!(row_json(&t, "k"), json!({"id": "k", "v": 2}));
    assert_eq!(t.last_id(), 2);
}

#[test]
fn key_survives_every_operation() {
    let mut t = users();
    t.insert_row(rec(json!({"name": "a"}))).unwrap();
    t.upsert_row(rec(json!({"id": 1, "name": "b"}))).unwrap();
    t.update_row(1, rec(json!({"name": "c"}))).unwrap();
    t.delete_row(1);
    assert_eq!(t.key(), "table_user");
}
