use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Local profile record mirroring an account at the external auth
/// service. Kept up to date from token claims on each visit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl NewUser {
    #[must_use]
    pub fn new(email: String, name: String, roles: Vec<String>) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            name: name.trim().to_string(),
            roles,
        }
    }
}
