//! Trip persistence. Creating or updating a trip writes the trip row,
//! its ordered destination links and its schedule entries in one
//! transaction so a failed write never leaves a partial plan behind.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::trip::{NewTrip, Trip, TripDetail, UpdateTrip};
use crate::models::trip::TripDestination as DbTripDestination;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TripListQuery, TripReader, TripWriter};

fn load_detail(
    conn: &mut crate::db::DbConnection,
    db_trip: crate::models::trip::Trip,
) -> Result<TripDetail, diesel::result::Error> {
    use crate::models::destination::Destination as DbDestination;
    use crate::models::trip::ScheduleEntry as DbScheduleEntry;
    use crate::schema::{destinations, schedule_entries, trip_destinations};

    let trip_id = db_trip.id;

    let links = trip_destinations::table
        .filter(trip_destinations::trip_id.eq(trip_id))
        .order(trip_destinations::position.asc())
        .load::<DbTripDestination>(conn)?;

    let destination_ids: Vec<i32> = links.iter().map(|l| l.destination_id).collect();
    let db_destinations = destinations::table
        .filter(destinations::id.eq_any(&destination_ids))
        .load::<DbDestination>(conn)?;
    let mut by_id: HashMap<i32, DbDestination> =
        db_destinations.into_iter().map(|d| (d.id, d)).collect();

    // Preserve the stored visit order.
    let ordered = destination_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .map(Into::into)
        .collect();

    let schedule = schedule_entries::table
        .filter(schedule_entries::trip_id.eq(trip_id))
        .order((schedule_entries::day.asc(), schedule_entries::start_time.asc()))
        .load::<DbScheduleEntry>(conn)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(TripDetail {
        trip: db_trip.into(),
        destinations: ordered,
        schedule,
    })
}

fn replace_children(
    conn: &mut crate::db::DbConnection,
    trip_id: i32,
    destinations: &[i32],
    schedule: &[crate::domain::trip::NewScheduleEntry],
) -> Result<(), diesel::result::Error> {
    use crate::models::trip::NewScheduleEntry as DbNewScheduleEntry;
    use crate::schema::{schedule_entries, trip_destinations};

    diesel::delete(schedule_entries::table.filter(schedule_entries::trip_id.eq(trip_id)))
        .execute(conn)?;
    diesel::delete(trip_destinations::table.filter(trip_destinations::trip_id.eq(trip_id)))
        .execute(conn)?;

    let links: Vec<DbTripDestination> = destinations
        .iter()
        .enumerate()
        .map(|(position, destination_id)| DbTripDestination {
            trip_id,
            destination_id: *destination_id,
            position: position as i32,
        })
        .collect();
    diesel::insert_into(trip_destinations::table)
        .values(&links)
        .execute(conn)?;

    let entries: Vec<DbNewScheduleEntry> = schedule
        .iter()
        .map(|entry| DbNewScheduleEntry::from_domain(trip_id, entry))
        .collect();
    diesel::insert_into(schedule_entries::table)
        .values(&entries)
        .execute(conn)?;

    Ok(())
}

impl TripReader for DieselRepository {
    fn get_trip_by_id(&self, id: i32) -> RepositoryResult<Option<TripDetail>> {
        use crate::models::trip::Trip as DbTrip;
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let db_trip = trips::table.find(id).first::<DbTrip>(&mut conn).optional()?;

        match db_trip {
            Some(db_trip) => Ok(Some(load_detail(&mut conn, db_trip)?)),
            None => Ok(None),
        }
    }

    fn get_trip_by_public_id(&self, public_id: &str) -> RepositoryResult<Option<TripDetail>> {
        use crate::models::trip::Trip as DbTrip;
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let db_trip = trips::table
            .filter(trips::public_id.eq(public_id))
            .first::<DbTrip>(&mut conn)
            .optional()?;

        match db_trip {
            Some(db_trip) => Ok(Some(load_detail(&mut conn, db_trip)?)),
            None => Ok(None),
        }
    }

    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<Trip>)> {
        use crate::models::trip::Trip as DbTrip;
        use crate::schema::trips;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = trips::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(user_email) = &query.user_email {
                items = items.filter(trips::user_email.eq(user_email));
            }
            if query.public_only {
                items = items.filter(trips::is_public.eq(true));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(trips::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let trips = items
            .load::<DbTrip>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, trips))
    }
}

impl TripWriter for DieselRepository {
    fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip> {
        use crate::models::trip::{NewTrip as DbNewTrip, Trip as DbTrip};
        use crate::schema::trips;

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            let insertable: DbNewTrip = new_trip.into();
            let db_trip = diesel::insert_into(trips::table)
                .values(&insertable)
                .get_result::<DbTrip>(conn)?;

            replace_children(conn, db_trip.id, &new_trip.destinations, &new_trip.schedule)?;

            Ok::<Trip, RepositoryError>(db_trip.into())
        })
    }

    fn update_trip(&self, trip_id: i32, updates: &UpdateTrip) -> RepositoryResult<Trip> {
        use crate::models::trip::{Trip as DbTrip, UpdateTrip as DbUpdateTrip};
        use crate::schema::trips;

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            let db_updates: DbUpdateTrip = updates.into();
            let db_trip = diesel::update(trips::table.find(trip_id))
                .set(&db_updates)
                .get_result::<DbTrip>(conn)?;

            replace_children(conn, trip_id, &updates.destinations, &updates.schedule)?;

            Ok::<Trip, RepositoryError>(db_trip.into())
        })
    }

    fn set_trip_visibility(&self, trip_id: i32, is_public: bool) -> RepositoryResult<Trip> {
        use crate::models::trip::Trip as DbTrip;
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let updated = diesel::update(trips::table.find(trip_id))
            .set((
                trips::is_public.eq(is_public),
                trips::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbTrip>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_trip(&self, trip_id: i32) -> RepositoryResult<()> {
        use crate::schema::{schedule_entries, trip_destinations, trips};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            diesel::delete(schedule_entries::table.filter(schedule_entries::trip_id.eq(trip_id)))
                .execute(conn)?;
            diesel::delete(
                trip_destinations::table.filter(trip_destinations::trip_id.eq(trip_id)),
            )
            .execute(conn)?;
            diesel::delete(trips::table.find(trip_id)).execute(conn)?;
            Ok(())
        })
    }
}
