//! Library records: catalog, loans, fines, and the librarian's notebook.

use iperform_core::serde::{
    lenient_bool, lenient_f64, lenient_i64, lenient_opt_string, lenient_string,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    /// Catalog reference such as `"MATH-001"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub book_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_available: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A loan; the borrower can be a student, a teacher, or a whole class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub book_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub book_title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub borrower_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub borrower_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub borrower_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub borrowed_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub due_date: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub returned_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub borrow_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_paid: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issued_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarianNote {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
