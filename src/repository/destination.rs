use diesel::prelude::*;

use crate::domain::destination::{
    Destination, DestinationActivity, NewDestination, NewDestinationActivity, UpdateDestination,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DestinationListQuery, DestinationReader, DestinationWriter, DieselRepository,
};

impl DestinationReader for DieselRepository {
    fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>> {
        use crate::models::destination::Destination as DbDestination;
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let destination = destinations::table
            .find(id)
            .first::<DbDestination>(&mut conn)
            .optional()?;

        Ok(destination.map(Into::into))
    }

    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<Destination>)> {
        use crate::models::destination::Destination as DbDestination;
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = destinations::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    destinations::name
                        .like(pattern.clone())
                        .or(destinations::location.like(pattern)),
                );
            }
            if let Some(category) = &query.category {
                items = items.filter(destinations::category.eq(category));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(destinations::name.asc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let destinations = items
            .load::<DbDestination>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, destinations))
    }

    fn list_destination_categories(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let categories = destinations::table
            .select(destinations::category)
            .distinct()
            .order(destinations::category.asc())
            .load::<String>(&mut conn)?;

        Ok(categories)
    }

    fn list_destination_activities(
        &self,
        destination_id: i32,
    ) -> RepositoryResult<Vec<DestinationActivity>> {
        use crate::models::destination::DestinationActivity as DbDestinationActivity;
        use crate::schema::destination_activities;

        let mut conn = self.conn()?;
        let activities = destination_activities::table
            .filter(destination_activities::destination_id.eq(destination_id))
            .order(destination_activities::start_time.asc())
            .load::<DbDestinationActivity>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(activities)
    }
}

impl DestinationWriter for DieselRepository {
    fn create_destination(
        &self,
        new_destination: &NewDestination,
    ) -> RepositoryResult<Destination> {
        use crate::models::destination::{
            Destination as DbDestination, NewDestination as DbNewDestination,
        };
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let insertable: DbNewDestination = new_destination.into();
        let destination = diesel::insert_into(destinations::table)
            .values(&insertable)
            .get_result::<DbDestination>(&mut conn)?;

        Ok(destination.into())
    }

    fn update_destination(
        &self,
        destination_id: i32,
        updates: &UpdateDestination,
    ) -> RepositoryResult<Destination> {
        use crate::models::destination::{
            Destination as DbDestination, UpdateDestination as DbUpdateDestination,
        };
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDestination = updates.into();
        let updated = diesel::update(destinations::table.find(destination_id))
            .set(&db_updates)
            .get_result::<DbDestination>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()> {
        use crate::schema::{destination_activities, destinations};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            diesel::delete(
                destination_activities::table
                    .filter(destination_activities::destination_id.eq(destination_id)),
            )
            .execute(conn)?;
            diesel::delete(destinations::table.find(destination_id)).execute(conn)?;
            Ok(())
        })
    }

    fn replace_destination_activities(
        &self,
        destination_id: i32,
        activities: &[NewDestinationActivity],
    ) -> RepositoryResult<usize> {
        use crate::models::destination::NewDestinationActivity as DbNewDestinationActivity;
        use crate::schema::destination_activities;

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            diesel::delete(
                destination_activities::table
                    .filter(destination_activities::destination_id.eq(destination_id)),
            )
            .execute(conn)?;

            let insertables: Vec<DbNewDestinationActivity> = activities
                .iter()
                .map(|a| DbNewDestinationActivity::from_domain(destination_id, a))
                .collect();
            let affected = diesel::insert_into(destination_activities::table)
                .values(&insertables)
                .execute(conn)?;

            Ok(affected)
        })
    }
}
