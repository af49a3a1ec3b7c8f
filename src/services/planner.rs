//! Wizard submit boundary: turns the session draft into persisted trips.

use crate::domain::draft::TripDraft;
use crate::domain::trip::Trip;
use crate::repository::{TripReader, TripWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates and submits a completed draft as a new trip.
///
/// A draft with no selected destinations is rejected before any
/// repository call is made.
pub fn submit_draft<R>(repo: &R, user_email: &str, draft: &TripDraft) -> ServiceResult<Trip>
where
    R: TripWriter + ?Sized,
{
    let new_trip = draft.normalize(user_email)?;
    repo.create_trip(&new_trip).map_err(ServiceError::from)
}

/// Applies a completed draft to an existing trip owned by the user.
pub fn resubmit_draft<R>(
    repo: &R,
    trip_id: i32,
    user_email: &str,
    draft: &TripDraft,
) -> ServiceResult<Trip>
where
    R: TripReader + TripWriter + ?Sized,
{
    let detail = repo
        .get_trip_by_id(trip_id)?
        .ok_or(ServiceError::NotFound)?;
    if detail.trip.user_email != user_email {
        return Err(ServiceError::Forbidden);
    }

    let updates = draft.normalize_update(user_email)?;
    repo.update_trip(trip_id, &updates)
        .map_err(ServiceError::from)
}

/// Loads a stored trip into a draft for the edit flow.
pub fn load_draft<R>(repo: &R, trip_id: i32, user_email: &str) -> ServiceResult<TripDraft>
where
    R: TripReader + ?Sized,
{
    let detail = repo
        .get_trip_by_id(trip_id)?
        .ok_or(ServiceError::NotFound)?;
    if detail.trip.user_email != user_email {
        return Err(ServiceError::Forbidden);
    }

    Ok(TripDraft::from(&detail))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::draft::{DestinationPick, DraftError, DraftPatch};
    use crate::repository::mock::MockRepository;

    fn pick(id: i32) -> DestinationPick {
        DestinationPick {
            destination_id: id,
            name: format!("Destinasi {id}"),
            category: "pantai".to_string(),
            image_url: None,
            rating: 4.5,
            price: None,
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
    fn submit_without_destinations_makes_no_repository_call() {
        let repo = MockRepository::new();
        let draft = dated_draft();

        let err = submit_draft(&repo, "user@example.com", &draft).unwrap_err();
        match err {
            ServiceError::Draft(DraftError::NoDestinations) => {}
            other => panic!("unexpected error: {other}"),
        }
        // MockRepository panics on unexpected calls, so reaching this
        // point proves create_trip was never invoked.
    }

    #[test]
    fn submit_normalizes_destination_order() {
        let mut repo = MockRepository::new();
        repo.expect_create_trip()
            .withf(|new_trip| new_trip.destinations == vec![7, 3])
            .returning(|new_trip| {
                Ok(crate::domain::trip::Trip {
                    id: 1,
                    user_email: new_trip.user_email.clone(),
                    public_id: uuid::Uuid::new_v4(),
                    name: new_trip.name.clone(),
                    start_date: new_trip.start_date,
                    end_date: new_trip.end_date,
                    people_count: new_trip.people_count,
                    trip_type: new_trip.trip_type,
                    budget: new_trip.budget.clone(),
                    notes: new_trip.notes.clone(),
                    packing_list: new_trip.packing_list.clone(),
                    is_public: new_trip.is_public,
                    created_at: chrono::Utc::now().naive_utc(),
                    updated_at: chrono::Utc::now().naive_utc(),
                })
            });

        let mut draft = dated_draft();
        draft.toggle_destination(pick(7));
        draft.toggle_destination(pick(3));

        let trip = submit_draft(&repo, "user@example.com", &draft).unwrap();
        assert_eq!(trip.user_email, "user@example.com");
    }

    #[test]
    fn resubmit_rejects_foreign_trip() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|id| {
            Ok(Some(crate::domain::trip::TripDetail {
                trip: crate::domain::trip::Trip {
                    id,
                    user_email: "owner@example.com".to_string(),
                    public_id: uuid::Uuid::new_v4(),
                    name: "Trip".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
                    people_count: 2,
                    trip_type: Default::default(),
                    budget: Default::default(),
                    notes: String::new(),
                    packing_list: vec![],
                    is_public: false,
                    created_at: chrono::Utc::now().naive_utc(),
                    updated_at: chrono::Utc::now().naive_utc(),
                },
                destinations: vec![],
                schedule: vec![],
            }))
        });

        let mut draft = dated_draft();
        draft.toggle_destination(pick(1));

        let err = resubmit_draft(&repo, 5, "intruder@example.com", &draft).unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden));
    }
}
