use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::destination::Destination;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub user_email: String,
    /// Stable identifier used in public share links.
    pub public_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: TripType,
    pub budget: Budget,
    pub notes: String,
    pub packing_list: Vec<String>,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Trip {
    /// Inclusive day span of the trip.
    pub fn day_count(&self) -> i32 {
        (self.end_date - self.start_date).num_days().max(0) as i32 + 1
    }

    pub fn total_budget(&self) -> i64 {
        self.budget.total()
    }
}

/// Category of travel party. Closed set.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripType {
    #[default]
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

impl TripType {
    pub const ALL: [TripType; 5] = [
        TripType::Solo,
        TripType::Couple,
        TripType::Family,
        TripType::Friends,
        TripType::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Solo => "solo",
            TripType::Couple => "couple",
            TripType::Family => "family",
            TripType::Friends => "friends",
            TripType::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Solo => "Solo",
            TripType::Couple => "Pasangan",
            TripType::Family => "Keluarga",
            TripType::Friends => "Teman / Grup",
            TripType::Business => "Bisnis",
        }
    }
}

impl Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for TripType {
    fn from(s: &str) -> Self {
        match s {
            "couple" => TripType::Couple,
            "family" => TripType::Family,
            "friends" => TripType::Friends,
            "business" => TripType::Business,
            _ => TripType::Solo,
        }
    }
}

/// Four plain budget buckets, a single assumed denomination.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub transport: i64,
    pub lodging: i64,
    pub food: i64,
    pub activities: i64,
}

impl Budget {
    pub fn total(&self) -> i64 {
        self.transport + self.lodging + self.food + self.activities
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewScheduleEntry {
    pub destination_id: i32,
    pub day: i32,
    pub start_time: String,
    pub end_time: String,
    pub label: String,
    pub note: Option<String>,
}

/// Normalized submit payload produced by the wizard.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewTrip {
    pub user_email: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: TripType,
    pub budget: Budget,
    pub notes: String,
    pub packing_list: Vec<String>,
    pub is_public: bool,
    /// Ordered destination ids; order is the visit sequence.
    pub destinations: Vec<i32>,
    pub schedule: Vec<NewScheduleEntry>,
}

/// Replacement payload applied to an existing trip. Owner and public id
/// are never changed by an update.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub trip_type: TripType,
    pub budget: Budget,
    pub notes: String,
    pub packing_list: Vec<String>,
    pub is_public: bool,
    pub destinations: Vec<i32>,
    pub schedule: Vec<NewScheduleEntry>,
}

impl From<NewTrip> for UpdateTrip {
    fn from(trip: NewTrip) -> Self {
        Self {
            name: trip.name,
            start_date: trip.start_date,
            end_date: trip.end_date,
            people_count: trip.people_count,
            trip_type: trip.trip_type,
            budget: trip.budget,
            notes: trip.notes,
            packing_list: trip.packing_list,
            is_public: trip.is_public,
            destinations: trip.destinations,
            schedule: trip.schedule,
        }
    }
}

/// A trip joined with its ordered destinations and schedule.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TripDetail {
    pub trip: Trip,
    /// Ordered by stored visit position.
    pub destinations: Vec<Destination>,
    pub schedule: Vec<ScheduleEntry>,
}
