use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::alert::{
    Alert as DomainAlert, AlertLevel, AlertStatus, NewAlert as DomainNewAlert,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::alerts)]
pub struct Alert {
    pub id: i32,
    pub message: String,
    pub level: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::alerts)]
pub struct NewAlert<'a> {
    pub message: &'a str,
    pub level: String,
    pub status: String,
}

impl From<Alert> for DomainAlert {
    fn from(alert: Alert) -> Self {
        Self {
            id: alert.id,
            message: alert.message,
            level: AlertLevel::from(alert.level.as_str()),
            status: AlertStatus::from(alert.status.as_str()),
            created_at: alert.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAlert> for NewAlert<'a> {
    fn from(alert: &'a DomainNewAlert) -> Self {
        Self {
            message: alert.message.as_str(),
            level: alert.level.to_string(),
            status: AlertStatus::Active.to_string(),
        }
    }
}
