//! Forms posted by the planning wizard steps. Each form maps to either
//! a [`DraftPatch`] or one draft operation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::draft::{DraftPatch, DraftScheduleEntry};
use crate::domain::trip::{Budget, TripType};
use crate::forms::{lines_to_list, validate_time_hhmm};

#[derive(Deserialize, Validate)]
/// Step 1: trip name, dates, party size and type.
pub struct BasicInfoForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1))]
    pub people_count: i32,
    pub trip_type: String,
}

impl From<&BasicInfoForm> for DraftPatch {
    fn from(form: &BasicInfoForm) -> Self {
        DraftPatch {
            name: Some(form.name.trim().to_string()),
            start_date: Some(form.start_date),
            end_date: Some(form.end_date),
            people_count: Some(form.people_count),
            trip_type: Some(TripType::from(form.trip_type.as_str())),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate)]
/// Step 2: add or remove one destination from the selection.
pub struct ToggleDestinationForm {
    #[validate(range(min = 1))]
    pub destination_id: i32,
}

#[derive(Deserialize)]
/// Step 2: swap two positions in the visit order.
pub struct ReorderDestinationsForm {
    pub from: usize,
    pub to: usize,
}

#[derive(Deserialize, Validate)]
/// Step 3: add one schedule entry to the active day.
pub struct AddActivityForm {
    #[validate(range(min = 1))]
    pub destination_id: i32,
    #[validate(range(min = 1))]
    pub day: i32,
    #[validate(custom(function = validate_time_hhmm))]
    pub start_time: String,
    #[validate(custom(function = validate_time_hhmm))]
    pub end_time: String,
    #[validate(length(min = 1))]
    pub label: String,
    pub note: Option<String>,
}

impl From<&AddActivityForm> for DraftScheduleEntry {
    fn from(form: &AddActivityForm) -> Self {
        Self {
            destination_id: form.destination_id,
            day: form.day,
            start_time: form.start_time.clone(),
            end_time: form.end_time.clone(),
            label: form.label.trim().to_string(),
            note: form
                .note
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
pub struct RemoveActivityForm {
    pub index: usize,
    /// Day the user is looking at, echoed back for the redirect.
    pub day: i32,
}

#[derive(Deserialize, Validate)]
/// Step 4: budget buckets, notes and packing list.
pub struct BudgetNotesForm {
    #[validate(range(min = 0))]
    pub transport: i64,
    #[validate(range(min = 0))]
    pub lodging: i64,
    #[validate(range(min = 0))]
    pub food: i64,
    #[validate(range(min = 0))]
    pub activities: i64,
    #[serde(default)]
    pub notes: String,
    /// One packing item per line.
    #[serde(default)]
    pub packing_list: String,
}

impl From<&BudgetNotesForm> for DraftPatch {
    fn from(form: &BudgetNotesForm) -> Self {
        DraftPatch {
            budget: Some(Budget {
                transport: form.transport,
                lodging: form.lodging,
                food: form.food,
                activities: form.activities,
            }),
            notes: Some(form.notes.trim().to_string()),
            packing_list: Some(lines_to_list(&form.packing_list)),
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
/// Step 5: final confirmation with the privacy toggle.
pub struct SubmitTripForm {
    /// Checkbox; present when the trip should be public.
    #[serde(default)]
    pub is_public: Option<String>,
}

impl SubmitTripForm {
    pub fn is_public(&self) -> bool {
        self.is_public.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_info_patch_leaves_other_fields_unset() {
        let form = BasicInfoForm {
            name: " Jelajah Sangihe ".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
            people_count: 4,
            trip_type: "friends".to_string(),
        };
        let patch = DraftPatch::from(&form);
        assert_eq!(patch.name.as_deref(), Some("Jelajah Sangihe"));
        assert_eq!(patch.trip_type, Some(TripType::Friends));
        assert!(patch.selected_destinations.is_none());
        assert!(patch.schedule.is_none());
        assert!(patch.budget.is_none());
    }

    #[test]
    fn add_activity_form_drops_blank_note() {
        let form = AddActivityForm {
            destination_id: 3,
            day: 1,
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            label: "Snorkeling".to_string(),
            note: Some("   ".to_string()),
        };
        let entry = DraftScheduleEntry::from(&form);
        assert_eq!(entry.note, None);
    }
}
