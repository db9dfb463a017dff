//! The inbound sanitizer.
//!
//! Every document that comes back from the inference service passes through
//! [`sanitize`] before it can become application state. The function is a
//! pure transform and total over any JSON value; whatever the service sends,
//! the result upholds three invariants:
//!
//! - every named collection is present and is a sequence (never absent,
//!   never null);
//! - every element of every collection is a structured record (null and
//!   primitive entries are dropped);
//! - `schoolProfile` exists, substituting the placeholder when the document
//!   omits it, and every user's role is canonical.
//!
//! Applying the sanitizer to its own serialized output is a no-op.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::profile::SchoolProfile;
use crate::state::SchoolState;

/// Builds a structurally valid [`SchoolState`] from an arbitrary decoded
/// JSON document. Non-object input is treated as an empty document.
pub fn sanitize(raw: Value) -> SchoolState {
    let mut doc = match raw {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let school_profile = profile_record(doc.remove("schoolProfile"));

    SchoolState {
        school_profile,
        users: collection(doc.remove("users")),
        classes: collection(doc.remove("classes")),
        teachers: collection(doc.remove("teachers")),
        students: collection(doc.remove("students")),
        marks: collection(doc.remove("marks")),
        conduct_marks: collection(doc.remove("conductMarks")),
        notes: collection(doc.remove("notes")),
        tests: collection(doc.remove("tests")),
        announcements: collection(doc.remove("announcements")),
        conduct_events: collection(doc.remove("conductEvents")),
        permissions: collection(doc.remove("permissions")),
        attendances: collection(doc.remove("attendances")),
        books: collection(doc.remove("books")),
        borrowed_books: collection(doc.remove("borrowedBooks")),
        fines: collection(doc.remove("fines")),
        librarian_notes: collection(doc.remove("librarianNotes")),
        fee_accounts: collection(doc.remove("feeAccounts")),
        payments: collection(doc.remove("payments")),
        expenses: collection(doc.remove("expenses")),
        stock_items: collection(doc.remove("stockItems")),
        dining_hall_seating: collection(doc.remove("diningHallSeating")),
        dormitory_allocation: collection(doc.remove("dormitoryAllocation")),
        messages: collection(doc.remove("messages")),
        group_messages: collection(doc.remove("groupMessages")),
        // Whatever top-level fields remain are unknown to us; keep them so
        // the full document round-trips back to the service.
        extra: doc,
    }
}

/// A non-array field becomes an empty sequence; array elements that are not
/// objects are dropped, the rest decode leniently.
fn collection<T>(field: Option<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    let Some(Value::Array(items)) = field else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(|item| item.is_object())
        // Lenient field decoding makes this infallible for objects; Default
        // is the backstop for anything it still rejects.
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}

fn profile_record(field: Option<Value>) -> SchoolProfile {
    match field {
        Some(value) if value.is_object() => {
            serde_json::from_value(value).unwrap_or_default()
        }
        _ => SchoolProfile::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_valid() {
        let state = sanitize(json!({}));
        assert!(state.users.is_empty());
        assert_eq!(state.school_profile, SchoolProfile::default());
    }

    #[test]
    fn test_non_object_input_is_treated_as_empty() {
        for raw in [json!(null), json!(42), json!("nope"), json!([1, 2])] {
            let state = sanitize(raw);
            assert_eq!(state.school_profile, SchoolProfile::default());
            assert!(state.students.is_empty());
        }
    }

    #[test]
    fn test_null_and_primitive_elements_are_dropped() {
        let state = sanitize(json!({
            "students": [null, {"name": "Ann"}, 42],
            "users": null
        }));
        assert_eq!(state.students.len(), 1);
        assert_eq!(state.students[0].name, "Ann");
        assert!(state.users.is_empty());
    }

    #[test]
    fn test_user_roles_are_canonicalized() {
        let state = sanitize(json!({
            "users": [
                {"username": "a", "role": "Director Of Studies"},
                {"username": "b", "role": "HeadBoy"},
                {"username": "c", "role": "Stock Keeper"},
                {"username": "d"}
            ]
        }));
        let roles: Vec<&Role> = state.users.iter().map(|u| &u.role).collect();
        assert_eq!(
            roles,
            vec![&Role::Dos, &Role::HeadBoy, &Role::StockKeeper, &Role::Student]
        );
    }

    #[test]
    fn test_unknown_top_level_fields_are_preserved() {
        let state = sanitize(json!({"schemaVersion": 3, "users": []}));
        assert_eq!(state.extra["schemaVersion"], json!(3));
        let doc = serde_json::to_value(&state).unwrap();
        assert_eq!(doc["schemaVersion"], json!(3));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let raw = json!({
            "schoolProfile": {"name": "Hill College"},
            "users": [
                {"username": "p", "role": "Principal", "mustChangePassword": "true"},
                null,
                {"username": "x", "role": "Janitor"}
            ],
            "marks": [{"id": "9", "mark": "77.5"}, "junk"],
            "leftover": {"kept": true}
        });
        let once = sanitize(raw);
        let twice = sanitize(serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }
}
