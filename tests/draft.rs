use chrono::NaiveDate;

use sangihe_trip::domain::draft::{
    DestinationPick, DraftError, DraftPatch, DraftScheduleEntry, TripDraft,
};
use sangihe_trip::domain::trip::{Budget, TripType};
use sangihe_trip::domain::wizard::{WizardMode, WizardStep, can_advance};

fn pick(id: i32, name: &str) -> DestinationPick {
    DestinationPick {
        destination_id: id,
        name: name.to_string(),
        category: "pantai".to_string(),
        image_url: None,
        rating: 4.5,
        price: None,
    }
}

fn entry(destination_id: i32, day: i32, start: &str) -> DraftScheduleEntry {
    DraftScheduleEntry {
        destination_id,
        day,
        start_time: start.to_string(),
        end_time: "23:00".to_string(),
        label: "Aktivitas".to_string(),
        note: None,
    }
}

fn dated_draft() -> TripDraft {
    let mut draft = TripDraft::default();
    draft.apply(DraftPatch {
        name: Some("Jelajah Sangihe".to_string()),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 20),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 22),
        ..Default::default()
    });
    draft
}

#[test]
fn test_patch_merge_is_shallow() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    draft.apply(DraftPatch {
        budget: Some(Budget {
            transport: 100,
            lodging: 200,
            food: 300,
            activities: 400,
        }),
        ..Default::default()
    });

    // Fields absent from the patch survive the merge.
    assert_eq!(draft.name, "Jelajah Sangihe");
    assert_eq!(draft.selected_destinations.len(), 1);
    assert_eq!(draft.total_budget(), 1000);
}

#[test]
fn test_day_count_is_inclusive() {
    let draft = dated_draft();
    assert_eq!(draft.day_count(), Some(3));

    let same_day = {
        let mut d = TripDraft::default();
        d.apply(DraftPatch {
            start_date: NaiveDate::from_ymd_opt(2025, 12, 20),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 20),
            ..Default::default()
        });
        d
    };
    assert_eq!(same_day.day_count(), Some(1));
}

#[test]
fn test_inverted_date_range_has_no_day_count() {
    let mut draft = TripDraft::default();
    draft.apply(DraftPatch {
        start_date: NaiveDate::from_ymd_opt(2025, 12, 22),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 20),
        ..Default::default()
    });
    assert_eq!(draft.day_count(), None);
    assert!(TripDraft::default().day_count().is_none());
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    assert!(draft.is_selected(1));

    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    assert!(!draft.is_selected(1));
    assert!(draft.selected_destinations.is_empty());
}

#[test]
fn test_deselecting_destination_cascades_to_schedule() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    draft.toggle_destination(pick(2, "Gunung Awu"));
    draft.add_schedule_entry(entry(1, 1, "09:00")).unwrap();
    draft.add_schedule_entry(entry(2, 2, "10:00")).unwrap();
    draft.add_schedule_entry(entry(1, 3, "08:00")).unwrap();

    draft.remove_destination(1);

    // Both the selection and every schedule entry referencing it are
    // gone; entries for other destinations stay.
    assert!(!draft.is_selected(1));
    assert_eq!(draft.schedule.len(), 1);
    assert_eq!(draft.schedule[0].destination_id, 2);
}

#[test]
fn test_move_destination_swaps_order() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "A"));
    draft.toggle_destination(pick(2, "B"));
    draft.toggle_destination(pick(3, "C"));

    draft.move_destination(0, 2);
    let order: Vec<i32> = draft
        .selected_destinations
        .iter()
        .map(|d| d.destination_id)
        .collect();
    assert_eq!(order, vec![3, 2, 1]);

    // Out-of-range indexes are ignored.
    draft.move_destination(0, 9);
    let unchanged: Vec<i32> = draft
        .selected_destinations
        .iter()
        .map(|d| d.destination_id)
        .collect();
    assert_eq!(unchanged, vec![3, 2, 1]);
}

#[test]
fn test_schedule_entry_requires_selected_destination() {
    let mut draft = dated_draft();
    let err = draft.add_schedule_entry(entry(9, 1, "09:00")).unwrap_err();
    assert_eq!(err, DraftError::UnknownDestination(9));
}

#[test]
fn test_schedule_entry_day_must_be_in_range() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));

    assert_eq!(
        draft.add_schedule_entry(entry(1, 0, "09:00")).unwrap_err(),
        DraftError::DayOutOfRange(0)
    );
    assert_eq!(
        draft.add_schedule_entry(entry(1, 4, "09:00")).unwrap_err(),
        DraftError::DayOutOfRange(4)
    );
    assert!(draft.add_schedule_entry(entry(1, 3, "09:00")).is_ok());
}

#[test]
fn test_entries_for_day_sorted_by_start_time() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    draft.add_schedule_entry(entry(1, 1, "13:00")).unwrap();
    draft.add_schedule_entry(entry(1, 1, "09:00")).unwrap();
    draft.add_schedule_entry(entry(1, 2, "08:00")).unwrap();

    let day_one: Vec<&str> = draft
        .entries_for_day(1)
        .iter()
        .map(|e| e.start_time.as_str())
        .collect();
    assert_eq!(day_one, vec!["09:00", "13:00"]);
}

#[test]
fn test_submit_without_destinations_is_rejected() {
    let draft = dated_draft();
    let err = draft.normalize("user@example.com").unwrap_err();
    assert_eq!(err, DraftError::NoDestinations);
    assert_eq!(
        err.to_string(),
        "Anda belum memilih destinasi untuk perjalanan ini."
    );
}

#[test]
fn test_normalize_keeps_visit_order() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(7, "B"));
    draft.toggle_destination(pick(3, "A"));

    let new_trip = draft.normalize("user@example.com").unwrap();
    assert_eq!(new_trip.destinations, vec![7, 3]);
    assert_eq!(new_trip.user_email, "user@example.com");
    assert_eq!(new_trip.trip_type, TripType::Solo);
}

#[test]
fn test_per_person_budget() {
    let mut draft = dated_draft();
    draft.apply(DraftPatch {
        people_count: Some(4),
        budget: Some(Budget {
            transport: 400_000,
            lodging: 400_000,
            food: 100_000,
            activities: 100_000,
        }),
        ..Default::default()
    });
    assert_eq!(draft.total_budget(), 1_000_000);
    assert_eq!(draft.per_person_budget(), 250_000);
}

#[test]
fn test_destination_step_guard() {
    let draft = dated_draft();
    assert_eq!(
        can_advance(WizardStep::Destinations, WizardMode::Create, &draft),
        Err(DraftError::NoDestinations)
    );

    let mut with_pick = dated_draft();
    with_pick.toggle_destination(pick(1, "Pantai Mahoro"));
    assert!(can_advance(WizardStep::Destinations, WizardMode::Create, &with_pick).is_ok());
}

#[test]
fn test_schedule_guard_only_blocks_edit_mode() {
    let mut draft = dated_draft();
    draft.toggle_destination(pick(1, "Pantai Mahoro"));

    // An empty schedule passes in the create flow but not when editing.
    assert!(can_advance(WizardStep::Schedule, WizardMode::Create, &draft).is_ok());
    assert_eq!(
        can_advance(WizardStep::Schedule, WizardMode::Edit(5), &draft),
        Err(DraftError::EmptySchedule)
    );

    draft.add_schedule_entry(entry(1, 1, "09:00")).unwrap();
    assert!(can_advance(WizardStep::Schedule, WizardMode::Edit(5), &draft).is_ok());
}

#[test]
fn test_wizard_step_sequence() {
    assert_eq!(WizardStep::from_number(1), Some(WizardStep::BasicInfo));
    assert_eq!(WizardStep::from_number(6), None);
    assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Destinations));
    assert_eq!(WizardStep::Review.next(), None);
    assert_eq!(WizardStep::BasicInfo.previous(), None);
    assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Budget));
}

/// Full walk through the planning flow against a three day trip.
#[test]
fn test_planning_scenario_deselect_keeps_day_tabs() {
    let mut draft = TripDraft::default();
    draft.apply(DraftPatch {
        name: Some("Libur akhir tahun".to_string()),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 20),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 22),
        people_count: Some(2),
        trip_type: Some(TripType::Couple),
        ..Default::default()
    });
    assert_eq!(draft.day_count(), Some(3));

    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    draft
        .add_schedule_entry(DraftScheduleEntry {
            destination_id: 1,
            day: 1,
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            label: "Snorkeling".to_string(),
            note: None,
        })
        .unwrap();
    assert_eq!(draft.entries_for_day(1).len(), 1);

    // Deselecting the destination empties the schedule but the trip
    // dates, and therefore the day tabs, are untouched.
    draft.toggle_destination(pick(1, "Pantai Mahoro"));
    assert!(draft.schedule.is_empty());
    assert_eq!(draft.day_count(), Some(3));
}
