use diesel::prelude::*;

use crate::domain::alert::{Alert, AlertStatus, NewAlert};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AlertListQuery, AlertReader, AlertWriter, DieselRepository};

impl AlertReader for DieselRepository {
    fn list_alerts(&self, query: AlertListQuery) -> RepositoryResult<(usize, Vec<Alert>)> {
        use crate::models::alert::Alert as DbAlert;
        use crate::schema::alerts;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = alerts::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(status) = &query.status {
                items = items.filter(alerts::status.eq(status.to_string()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(alerts::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let alerts = items
            .load::<DbAlert>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, alerts))
    }
}

impl AlertWriter for DieselRepository {
    fn create_alert(&self, new_alert: &NewAlert) -> RepositoryResult<Alert> {
        use crate::models::alert::{Alert as DbAlert, NewAlert as DbNewAlert};
        use crate::schema::alerts;

        let mut conn = self.conn()?;
        let insertable: DbNewAlert = new_alert.into();
        let alert = diesel::insert_into(alerts::table)
            .values(&insertable)
            .get_result::<DbAlert>(&mut conn)?;

        Ok(alert.into())
    }

    fn set_alert_status(&self, alert_id: i32, status: AlertStatus) -> RepositoryResult<Alert> {
        use crate::models::alert::Alert as DbAlert;
        use crate::schema::alerts;

        let mut conn = self.conn()?;
        let updated = diesel::update(alerts::table.find(alert_id))
            .set(alerts::status.eq(status.to_string()))
            .get_result::<DbAlert>(&mut conn)?;

        Ok(updated.into())
    }
}
