//! Academic records: classes, staff and student rosters, marks, conduct
//! marks, shared resources, and attendance registers.

use iperform_core::serde::{
    lenient_f64, lenient_i64, lenient_string, lenient_string_vec,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A class (stream) such as "S4". Graduated classes are retained for record
/// keeping with a status of `"Graduated"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    /// Names of the classes this teacher covers.
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub classes: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    /// Username of the parent account linked to this student.
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A subject mark uploaded by a teacher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mark: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A conduct score adjustment; positive adds, negative removes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductMark {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recorded_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recorded_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A class resource (notes) uploaded by a teacher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An uploaded test paper; `test_type` is `"Individual"` or `"Group"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPaper {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub test_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploaded_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One day's register for one class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub present_student_ids: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recorded_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
