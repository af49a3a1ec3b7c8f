//! Step sequence and navigation guards for the trip planning wizard.

use serde::{Deserialize, Serialize};

use crate::domain::draft::{DraftError, TripDraft};

/// Fixed linear step sequence of the planning wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    BasicInfo,
    Destinations,
    Schedule,
    Budget,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::Destinations,
        WizardStep::Schedule,
        WizardStep::Budget,
        WizardStep::Review,
    ];

    /// 1-based position used in planner URLs.
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Destinations => 2,
            WizardStep::Schedule => 3,
            WizardStep::Budget => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Info Dasar",
            WizardStep::Destinations => "Pilih Destinasi",
            WizardStep::Schedule => "Susun Jadwal",
            WizardStep::Budget => "Anggaran & Catatan",
            WizardStep::Review => "Tinjau & Simpan",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "planner/basic_info.html",
            WizardStep::Destinations => "planner/destinations.html",
            WizardStep::Schedule => "planner/schedule.html",
            WizardStep::Budget => "planner/budget.html",
            WizardStep::Review => "planner/review.html",
        }
    }
}

/// Whether the wizard creates a new trip or edits a stored one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardMode {
    Create,
    /// Carries the id of the trip being edited.
    Edit(i32),
}

/// Checks whether the user may advance past `step`.
///
/// The destination step requires at least one selection. The schedule
/// step requires a non-empty schedule in the edit flow only; the create
/// flow lets an empty schedule through.
pub fn can_advance(step: WizardStep, mode: WizardMode, draft: &TripDraft) -> Result<(), DraftError> {
    match step {
        WizardStep::Destinations if draft.selected_destinations.is_empty() => {
            Err(DraftError::NoDestinations)
        }
        WizardStep::Schedule
            if matches!(mode, WizardMode::Edit(_)) && draft.schedule.is_empty() =>
        {
            Err(DraftError::EmptySchedule)
        }
        _ => Ok(()),
    }
}
