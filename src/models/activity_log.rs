use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::activity_log::{
    ActivityLog as DomainActivityLog, NewActivityLog as DomainNewActivityLog,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct ActivityLog {
    pub id: i32,
    pub actor_email: String,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct NewActivityLog<'a> {
    pub actor_email: &'a str,
    pub action: &'a str,
    pub entity: &'a str,
    pub entity_id: Option<i32>,
}

impl From<ActivityLog> for DomainActivityLog {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            actor_email: log.actor_email,
            action: log.action,
            entity: log.entity,
            entity_id: log.entity_id,
            created_at: log.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewActivityLog> for NewActivityLog<'a> {
    fn from(log: &'a DomainNewActivityLog) -> Self {
        Self {
            actor_email: log.actor_email.as_str(),
            action: log.action.as_str(),
            entity: log.entity.as_str(),
            entity_id: log.entity_id,
        }
    }
}
