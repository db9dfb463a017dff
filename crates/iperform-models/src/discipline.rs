//! Discipline-office records: conduct events, exit permissions, and the
//! facility allocations the Director of Discipline manages.

use iperform_core::serde::{lenient_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A send-out event; `returned_at` stays null until the student is back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductEvent {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub teacher_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    /// `"minor"` or `"major"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: String,
    /// `"sent_out"` or `"returned"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sent_at: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub returned_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An exit or temporary permission granted by the Director of Discipline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSlip {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    /// `"Exit"` or `"Temporary"`.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub destination: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub granted_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issued_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub valid_until: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningHallSeat {
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub table_number: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DormitoryAllocation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dormitory: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub chamber: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_type_round_trips_on_the_wire() {
        let slip: PermissionSlip =
            serde_json::from_value(json!({"id": 1, "type": "Exit"})).unwrap();
        assert_eq!(slip.kind, "Exit");
        let back = serde_json::to_value(&slip).unwrap();
        assert_eq!(back["type"], json!("Exit"));
    }
}
