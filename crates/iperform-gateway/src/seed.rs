use serde::{Deserialize, Serialize};

/// Optional hint for the materialize operation: a school to generate data
/// for and, when registering, the administrator account to bake in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRequest {
    pub school_name: String,
    pub admin: Option<AdminSeed>,
}

impl SeedRequest {
    pub fn named(school_name: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            admin: None,
        }
    }
}

/// The principal account a newly registered school starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}
