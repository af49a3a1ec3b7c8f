use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Append-only record of a moderation or management action taken in the
/// admin back-office.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    pub id: i32,
    pub actor_email: String,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewActivityLog {
    pub actor_email: String,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
}

impl NewActivityLog {
    #[must_use]
    pub fn new(
        actor_email: impl Into<String>,
        action: impl Into<String>,
        entity: impl Into<String>,
        entity_id: Option<i32>,
    ) -> Self {
        Self {
            actor_email: actor_email.into(),
            action: action.into(),
            entity: entity.into(),
            entity_id,
        }
    }
}
