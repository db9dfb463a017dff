mod common;

use common::raw_demo_document;
use iperform_models::state::COLLECTION_FIELDS;
use iperform_models::{Role, SchoolProfile, sanitize};
use serde_json::{Value, json};

#[test]
fn test_sanitize_is_idempotent() {
    let inputs = vec![
        json!({}),
        json!(null),
        json!("not even an object"),
        raw_demo_document(),
        json!({"users": [{"role": "Dean of Discipline"}], "extraneous": [1, 2, 3]}),
    ];
    for raw in inputs {
        let once = sanitize(raw.clone());
        let twice = sanitize(serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice, "sanitize not idempotent for {}", raw);
    }
}

#[test]
fn test_every_collection_is_a_sequence() {
    let state = sanitize(json!({
        "users": null,
        "marks": 5,
        "books": {"title": "not a list"},
        "payments": "nope"
    }));
    let doc = serde_json::to_value(&state).unwrap();
    for field in COLLECTION_FIELDS {
        assert!(
            doc[field].is_array(),
            "collection '{}' is {:?}, expected array",
            field,
            doc[field]
        );
    }
}

#[test]
fn test_no_collection_element_is_null_or_primitive() {
    let state = sanitize(raw_demo_document());
    let doc = serde_json::to_value(&state).unwrap();
    for field in COLLECTION_FIELDS {
        let Value::Array(items) = &doc[field] else {
            panic!("collection '{}' is not an array", field);
        };
        for item in items {
            assert!(item.is_object(), "'{}' kept a non-object element", field);
        }
    }
}

#[test]
fn test_role_canonicalization() {
    let state = sanitize(json!({
        "users": [
            {"role": "Director Of Studies"},
            {"role": "HeadBoy"},
            {"role": "Stock Keeper"}
        ]
    }));
    assert_eq!(state.users[0].role, Role::Dos);
    assert_eq!(state.users[1].role, Role::HeadBoy);
    assert_eq!(state.users[2].role, Role::StockKeeper);

    let doc = serde_json::to_value(&state).unwrap();
    assert_eq!(doc["users"][0]["role"], json!("dos"));
    assert_eq!(doc["users"][1]["role"], json!("head_boy"));
    assert_eq!(doc["users"][2]["role"], json!("stock_keeper"));
}

#[test]
fn test_default_profile_substituted_when_absent() {
    let state = sanitize(json!({}));
    assert_eq!(state.school_profile, SchoolProfile::default());
    assert!(!state.school_profile.name.is_empty());

    // A present profile is used as sent, not replaced.
    let state = sanitize(json!({"schoolProfile": {"name": "Hill College"}}));
    assert_eq!(state.school_profile.name, "Hill College");
    assert_eq!(state.school_profile.code, "");
}

#[test]
fn test_mixed_garbage_students_and_null_users() {
    let state = sanitize(json!({
        "students": [null, {"name": "Ann"}, 42],
        "users": null
    }));
    assert_eq!(state.students.len(), 1);
    assert_eq!(state.students[0].name, "Ann");
    assert!(state.users.is_empty());
}

#[test]
fn test_unknown_fields_round_trip() {
    let state = sanitize(raw_demo_document());
    let doc = serde_json::to_value(&state).unwrap();
    // Top-level commentary field and unknown profile field both survive.
    assert_eq!(
        doc["note"],
        json!("the service sometimes adds commentary fields like this one")
    );
    assert_eq!(doc["schoolProfile"]["founded"], json!(1987));
}

#[test]
fn test_wrong_typed_scalars_coerce_inside_records() {
    let state = sanitize(raw_demo_document());
    assert_eq!(state.students[0].id, 1);
    assert_eq!(state.marks[0].mark, 77.0);
    let newstaff = state.find_user("newstaff").unwrap();
    assert!(newstaff.must_change_password);
}
