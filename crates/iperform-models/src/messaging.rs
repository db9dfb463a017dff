//! Announcements and parent communication.
//!
//! Direct messages are fanned out by the inference service (one record per
//! parent) following the messaging rules in the gateway's system
//! instruction; class-group chatter lands in [`GroupMessage`] instead.

use iperform_core::serde::{lenient_bool, lenient_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A staff announcement; `role` is the audience it was posted for and is
/// not canonicalized (only user records get role normalization).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub posted_by: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub posted_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recipient_role: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub recipient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sent_at: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub read: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A message in a class group thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sent_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
