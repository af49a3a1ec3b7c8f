use diesel::prelude::*;

use crate::domain::activity_log::{ActivityLog, NewActivityLog};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ActivityLogListQuery, ActivityLogReader, ActivityLogWriter, DieselRepository};

impl ActivityLogReader for DieselRepository {
    fn list_activity_logs(
        &self,
        query: ActivityLogListQuery,
    ) -> RepositoryResult<(usize, Vec<ActivityLog>)> {
        use crate::models::activity_log::ActivityLog as DbActivityLog;
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;

        let total = activity_logs::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = activity_logs::table
            .order(activity_logs::created_at.desc())
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let logs = items
            .load::<DbActivityLog>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, logs))
    }
}

impl ActivityLogWriter for DieselRepository {
    fn log_activity(&self, new_log: &NewActivityLog) -> RepositoryResult<ActivityLog> {
        use crate::models::activity_log::{
            ActivityLog as DbActivityLog, NewActivityLog as DbNewActivityLog,
        };
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;
        let insertable: DbNewActivityLog = new_log.into();
        let log = diesel::insert_into(activity_logs::table)
            .values(&insertable)
            .get_result::<DbActivityLog>(&mut conn)?;

        Ok(log.into())
    }
}
