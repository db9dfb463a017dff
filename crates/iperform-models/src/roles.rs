//! The closed set of user roles and the synonym table that maps the
//! inference service's free-text labels onto it.
//!
//! The service is instructed to use canonical lowercase tokens but routinely
//! answers with verbose or cased variants ("Director Of Studies", "HeadBoy").
//! [`Role::parse`] is total: known labels land on a canonical variant,
//! anything else is kept lowercased and trimmed in [`Role::Unrecognized`] so
//! a bad label stays visible instead of being silently rewritten.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A user's role within the school.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Principal,
    /// Director of Studies.
    Dos,
    /// Director of Discipline.
    Dod,
    Teacher,
    Student,
    Librarian,
    Bursar,
    Secretary,
    StockKeeper,
    HeadBoy,
    HeadGirl,
    Parent,
    /// A label outside the closed set, kept lowercased and trimmed.
    Unrecognized(String),
}

impl Role {
    /// Canonical tokens, as they appear on the wire.
    pub const CANONICAL: [&'static str; 12] = [
        "principal",
        "dos",
        "dod",
        "teacher",
        "student",
        "librarian",
        "bursar",
        "secretary",
        "stock_keeper",
        "head_boy",
        "head_girl",
        "parent",
    ];

    /// Maps a free-text label to a role. Lowercases and trims, then applies
    /// the synonym table for the verbose spellings the service produces.
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "principal" => Self::Principal,
            "dos" | "director of studies" | "directorofstudies" => Self::Dos,
            "dod" | "director of discipline" | "directorofdiscipline" | "dean of discipline" => {
                Self::Dod
            }
            "teacher" => Self::Teacher,
            "student" => Self::Student,
            "librarian" => Self::Librarian,
            "bursar" => Self::Bursar,
            "secretary" => Self::Secretary,
            "stock_keeper" | "stock keeper" | "stockkeeper" => Self::StockKeeper,
            "head_boy" | "head boy" | "headboy" => Self::HeadBoy,
            "head_girl" | "head girl" | "headgirl" => Self::HeadGirl,
            "parent" => Self::Parent,
            _ => Self::Unrecognized(normalized),
        }
    }

    /// The canonical wire token for this role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Principal => "principal",
            Self::Dos => "dos",
            Self::Dod => "dod",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Librarian => "librarian",
            Self::Bursar => "bursar",
            Self::Secretary => "secretary",
            Self::StockKeeper => "stock_keeper",
            Self::HeadBoy => "head_boy",
            Self::HeadGirl => "head_girl",
            Self::Parent => "parent",
            Self::Unrecognized(label) => label,
        }
    }

    /// Whether this role is in the closed set.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Head boy or head girl.
    pub fn is_prefect(&self) -> bool {
        matches!(self, Self::HeadBoy | Self::HeadGirl)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Student
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    /// Total over any JSON value: scalars are stringified and parsed, a
    /// missing or non-scalar role falls back to [`Role::Student`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let role = match value {
            Value::String(s) => Self::parse(&s),
            Value::Number(n) => Self::Unrecognized(n.to_string()),
            _ => Self::default(),
        };
        Ok(role)
    }
}
