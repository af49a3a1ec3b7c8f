//! In-memory trip draft accumulated across the planning wizard steps.
//!
//! The draft lives in the visitor's session cookie and is never persisted
//! on its own: it is merged patch by patch while the wizard advances and
//! turned into a [`NewTrip`] payload on final submit. All mutation goes
//! through [`TripDraft::apply`] or one of the invariant-preserving
//! operations below, so wizard steps can update disjoint slices of the
//! draft without clobbering each other.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::destination::Destination;
use crate::domain::trip::{Budget, NewScheduleEntry, NewTrip, TripDetail, TripType, UpdateTrip};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Anda belum memilih destinasi untuk perjalanan ini.")]
    NoDestinations,

    #[error("Jadwal perjalanan masih kosong.")]
    EmptySchedule,

    #[error("Tanggal mulai dan selesai perjalanan belum diisi.")]
    MissingDates,

    #[error("day {0} is outside the trip date range")]
    DayOutOfRange(i32),

    #[error("destination {0} is not part of the selection")]
    UnknownDestination(i32),
}

/// Cached display snapshot of a selected destination.
///
/// The wizard keeps the snapshot so the review step can render without
/// re-fetching the catalog; only the id is submitted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DestinationPick {
    pub destination_id: i32,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub price: Option<i32>,
}

impl From<&Destination> for DestinationPick {
    fn from(destination: &Destination) -> Self {
        Self {
            destination_id: destination.id,
            name: destination.name.clone(),
            category: destination.category.clone(),
            image_url: destination.image_url.clone(),
            rating: destination.rating,
            price: destination.price,
        }
    }
}

/// One activity occurrence inside the draft schedule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DraftScheduleEntry {
    pub destination_id: i32,
    /// 1-based day index within the trip date range.
    pub day: i32,
    /// `HH:MM`, zero padded so lexicographic order is chronological.
    pub start_time: String,
    pub end_time: String,
    pub label: String,
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TripDraft {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub people_count: i32,
    pub trip_type: TripType,
    pub selected_destinations: Vec<DestinationPick>,
    pub schedule: Vec<DraftScheduleEntry>,
    pub budget: Budget,
    pub notes: String,
    pub packing_list: Vec<String>,
    pub is_public: bool,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_date: None,
            end_date: None,
            people_count: 1,
            trip_type: TripType::default(),
            selected_destinations: Vec::new(),
            schedule: Vec::new(),
            budget: Budget::default(),
            notes: String::new(),
            packing_list: Vec::new(),
            is_public: false,
        }
    }
}

/// Partial update merged into the draft by [`TripDraft::apply`].
///
/// Absent fields leave the corresponding draft fields untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub people_count: Option<i32>,
    pub trip_type: Option<TripType>,
    pub selected_destinations: Option<Vec<DestinationPick>>,
    pub schedule: Option<Vec<DraftScheduleEntry>>,
    pub budget: Option<Budget>,
    pub notes: Option<String>,
    pub packing_list: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl TripDraft {
    /// Shallow-merges `patch` into the draft: only fields present in the
    /// patch are overwritten.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(people_count) = patch.people_count {
            self.people_count = people_count;
        }
        if let Some(trip_type) = patch.trip_type {
            self.trip_type = trip_type;
        }
        if let Some(selected) = patch.selected_destinations {
            self.selected_destinations = selected;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(packing_list) = patch.packing_list {
            self.packing_list = packing_list;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }

    /// Inclusive number of days between start and end date.
    ///
    /// `None` while either date is unset or the range is inverted.
    pub fn day_count(&self) -> Option<i32> {
        let (start, end) = (self.start_date?, self.end_date?);
        let days = (end - start).num_days();
        if days < 0 {
            return None;
        }
        Some(days as i32 + 1)
    }

    pub fn is_selected(&self, destination_id: i32) -> bool {
        self.selected_destinations
            .iter()
            .any(|d| d.destination_id == destination_id)
    }

    /// Adds the destination to the selection, or removes it (cascading the
    /// schedule cleanup) when it is already selected.
    pub fn toggle_destination(&mut self, pick: DestinationPick) {
        if self.is_selected(pick.destination_id) {
            self.remove_destination(pick.destination_id);
        } else {
            self.selected_destinations.push(pick);
        }
    }

    /// Removes a destination from the selection together with every
    /// schedule entry referencing it, in one atomic step.
    pub fn remove_destination(&mut self, destination_id: i32) {
        self.selected_destinations
            .retain(|d| d.destination_id != destination_id);
        self.schedule.retain(|e| e.destination_id != destination_id);
    }

    /// Swaps two selected destinations to express visit order.
    pub fn move_destination(&mut self, from: usize, to: usize) {
        if from < self.selected_destinations.len() && to < self.selected_destinations.len() {
            self.selected_destinations.swap(from, to);
        }
    }

    /// Appends a schedule entry after checking the referential and day
    /// range invariants.
    pub fn add_schedule_entry(&mut self, entry: DraftScheduleEntry) -> Result<(), DraftError> {
        if !self.is_selected(entry.destination_id) {
            return Err(DraftError::UnknownDestination(entry.destination_id));
        }
        let day_count = self.day_count().ok_or(DraftError::MissingDates)?;
        if entry.day < 1 || entry.day > day_count {
            return Err(DraftError::DayOutOfRange(entry.day));
        }
        self.schedule.push(entry);
        Ok(())
    }

    pub fn remove_schedule_entry(&mut self, index: usize) {
        if index < self.schedule.len() {
            self.schedule.remove(index);
        }
    }

    /// Entries for one day, sorted by start time.
    pub fn entries_for_day(&self, day: i32) -> Vec<&DraftScheduleEntry> {
        let mut entries: Vec<&DraftScheduleEntry> =
            self.schedule.iter().filter(|e| e.day == day).collect();
        entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        entries
    }

    /// Derived total over the four budget buckets. Display only.
    pub fn total_budget(&self) -> i64 {
        self.budget.total()
    }

    /// Derived per-person average. Display only.
    pub fn per_person_budget(&self) -> i64 {
        self.total_budget() / i64::from(self.people_count.max(1))
    }

    /// Validates the draft and assembles the normalized submit payload:
    /// destinations as an ordered id list, schedule flattened.
    pub fn normalize(&self, user_email: &str) -> Result<NewTrip, DraftError> {
        if self.selected_destinations.is_empty() {
            return Err(DraftError::NoDestinations);
        }
        let start_date = self.start_date.ok_or(DraftError::MissingDates)?;
        let end_date = self.end_date.ok_or(DraftError::MissingDates)?;

        Ok(NewTrip {
            user_email: user_email.to_string(),
            name: self.name.clone(),
            start_date,
            end_date,
            people_count: self.people_count.max(1),
            trip_type: self.trip_type,
            budget: self.budget.clone(),
            notes: self.notes.clone(),
            packing_list: self.packing_list.clone(),
            is_public: self.is_public,
            destinations: self
                .selected_destinations
                .iter()
                .map(|d| d.destination_id)
                .collect(),
            schedule: self
                .schedule
                .iter()
                .map(|e| NewScheduleEntry {
                    destination_id: e.destination_id,
                    day: e.day,
                    start_time: e.start_time.clone(),
                    end_time: e.end_time.clone(),
                    label: e.label.clone(),
                    note: e.note.clone(),
                })
                .collect(),
        })
    }

    /// Same payload as [`TripDraft::normalize`] shaped for the edit flow.
    pub fn normalize_update(&self, user_email: &str) -> Result<UpdateTrip, DraftError> {
        self.normalize(user_email).map(UpdateTrip::from)
    }
}

impl From<&TripDetail> for TripDraft {
    /// Pre-populates a draft from a stored trip for the edit flow.
    fn from(detail: &TripDetail) -> Self {
        Self {
            name: detail.trip.name.clone(),
            start_date: Some(detail.trip.start_date),
            end_date: Some(detail.trip.end_date),
            people_count: detail.trip.people_count,
            trip_type: detail.trip.trip_type,
            selected_destinations: detail.destinations.iter().map(Into::into).collect(),
            schedule: detail
                .schedule
                .iter()
                .map(|e| DraftScheduleEntry {
                    destination_id: e.destination_id,
                    day: e.day,
                    start_time: e.start_time.clone(),
                    end_time: e.end_time.clone(),
                    label: e.label.clone(),
                    note: e.note.clone(),
                })
                .collect(),
            budget: detail.trip.budget.clone(),
            notes: detail.trip.notes.clone(),
            packing_list: detail.trip.packing_list.clone(),
            is_public: detail.trip.is_public,
        }
    }
}
