//! Diesel models for trips, their ordered destinations and schedule.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::trip::{
    Budget, NewScheduleEntry as DomainNewScheduleEntry, ScheduleEntry as DomainScheduleEntry,
    Trip as DomainTrip, TripType,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trips)]
/// Diesel model for [`crate::domain::trip::Trip`]. The packing list is
/// stored as JSON text.
pub struct Trip {
    pub id: i32,
    pub user_email: String,
    pub public_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: String,
    pub budget_transport: i64,
    pub budget_lodging: i64,
    pub budget_food: i64,
    pub budget_activities: i64,
    pub notes: String,
    pub packing_list: String,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::trips)]
pub struct NewTrip {
    pub user_email: String,
    pub public_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: String,
    pub budget_transport: i64,
    pub budget_lodging: i64,
    pub budget_food: i64,
    pub budget_activities: i64,
    pub notes: String,
    pub packing_list: String,
    pub is_public: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::trips)]
pub struct UpdateTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: String,
    pub budget_transport: i64,
    pub budget_lodging: i64,
    pub budget_food: i64,
    pub budget_activities: i64,
    pub notes: String,
    pub packing_list: String,
    pub is_public: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable, Associations)]
#[diesel(belongs_to(Trip, foreign_key = trip_id))]
#[diesel(table_name = crate::schema::trip_destinations)]
#[diesel(primary_key(trip_id, destination_id))]
pub struct TripDestination {
    pub trip_id: i32,
    pub destination_id: i32,
    /// Zero-based visit order.
    pub position: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Trip, foreign_key = trip_id))]
#[diesel(table_name = crate::schema::schedule_entries)]
pub struct ScheduleEntry {
    pub id: i32,
    pub trip_id: i32,
    pub destination_id: i32,
    pub day: i32,
    pub start_time: String,
    pub end_time: String,
    pub label: String,
    pub note: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::schedule_entries)]
pub struct NewScheduleEntry {
    pub trip_id: i32,
    pub destination_id: i32,
    pub day: i32,
    pub start_time: String,
    pub end_time: String,
    pub label: String,
    pub note: Option<String>,
}

impl From<Trip> for DomainTrip {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            user_email: trip.user_email,
            public_id: Uuid::parse_str(&trip.public_id).unwrap_or_default(),
            name: trip.name,
            start_date: trip.start_date,
            end_date: trip.end_date,
            people_count: trip.people_count,
            trip_type: TripType::from(trip.trip_type.as_str()),
            budget: Budget {
                transport: trip.budget_transport,
                lodging: trip.budget_lodging,
                food: trip.budget_food,
                activities: trip.budget_activities,
            },
            notes: trip.notes,
            packing_list: serde_json::from_str(&trip.packing_list).unwrap_or_default(),
            is_public: trip.is_public,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

impl From<ScheduleEntry> for DomainScheduleEntry {
    fn from(entry: ScheduleEntry) -> Self {
        Self {
            id: entry.id,
            trip_id: entry.trip_id,
            destination_id: entry.destination_id,
            day: entry.day,
            start_time: entry.start_time,
            end_time: entry.end_time,
            label: entry.label,
            note: entry.note,
        }
    }
}

impl From<&crate::domain::trip::NewTrip> for NewTrip {
    fn from(trip: &crate::domain::trip::NewTrip) -> Self {
        Self {
            user_email: trip.user_email.clone(),
            public_id: Uuid::new_v4().to_string(),
            name: trip.name.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            people_count: trip.people_count,
            trip_type: trip.trip_type.to_string(),
            budget_transport: trip.budget.transport,
            budget_lodging: trip.budget.lodging,
            budget_food: trip.budget.food,
            budget_activities: trip.budget.activities,
            notes: trip.notes.clone(),
            packing_list: serde_json::to_string(&trip.packing_list).unwrap_or_default(),
            is_public: trip.is_public,
        }
    }
}

impl From<&crate::domain::trip::UpdateTrip> for UpdateTrip {
    fn from(trip: &crate::domain::trip::UpdateTrip) -> Self {
        Self {
            name: trip.name.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            people_count: trip.people_count,
            trip_type: trip.trip_type.to_string(),
            budget_transport: trip.budget.transport,
            budget_lodging: trip.budget.lodging,
            budget_food: trip.budget.food,
            budget_activities: trip.budget.activities,
            notes: trip.notes.clone(),
            packing_list: serde_json::to_string(&trip.packing_list).unwrap_or_default(),
            is_public: trip.is_public,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl NewScheduleEntry {
    pub fn from_domain(trip_id: i32, entry: &DomainNewScheduleEntry) -> Self {
        Self {
            trip_id,
            destination_id: entry.destination_id,
            day: entry.day,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
            label: entry.label.clone(),
            note: entry.note.clone(),
        }
    }
}
