//! User directory records.
//!
//! Users are the one record type the sanitizer rewrites beyond the generic
//! clean pass: the `role` field is canonicalized through [`Role`]'s synonym
//! table so the rest of the system can match on the closed enum.

use crate::roles::Role;
use iperform_core::serde::{lenient_bool, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A login-capable account in the school directory.
///
/// Staff accounts carry only identity fields; student accounts additionally
/// reference their admission record (`student_id`, `class`) and their
/// parent's username (`parent_id`).
///
/// `password` is the plaintext the inference service generated or a value a
/// user set through the password-change flow. This is demo-grade by design:
/// the credential store lives inside an AI-managed document and is not a
/// security boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub student_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub class: Option<String>,
    /// Set on accounts created by staff; the login gate holds such users in
    /// a pending slot until a password-change mutation succeeds.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub must_change_password: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Case-insensitive username match, the way the login screen compares.
    pub fn matches_username(&self, candidate: &str) -> bool {
        self.username.trim().eq_ignore_ascii_case(candidate.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verbose_role_is_canonicalized() {
        let user: User =
            serde_json::from_value(json!({"username": "jk", "role": "Director Of Studies"}))
                .unwrap();
        assert_eq!(user.role, Role::Dos);
    }

    #[test]
    fn test_missing_role_defaults_to_student() {
        let user: User = serde_json::from_value(json!({"username": "jk"})).unwrap();
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_username_match_ignores_case_and_padding() {
        let user = User {
            username: "Principal".to_string(),
            ..User::default()
        };
        assert!(user.matches_username("  principal "));
        assert!(!user.matches_username("principal2"));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({"username": "jk", "role": "teacher", "officeHours": "8-5"});
        let user: User = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["officeHours"], json!("8-5"));
    }
}
