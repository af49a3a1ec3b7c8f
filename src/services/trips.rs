use crate::domain::trip::{Trip, TripDetail};
use crate::repository::{TripListQuery, TripReader, TripWriter};
use crate::services::{ServiceError, ServiceResult};

/// Paginated list of the user's own trips.
pub fn list_user_trips<R>(
    repo: &R,
    user_email: &str,
    page: usize,
    per_page: usize,
) -> ServiceResult<(usize, Vec<Trip>)>
where
    R: TripReader + ?Sized,
{
    repo.list_trips(
        TripListQuery::new()
            .user_email(user_email)
            .paginate(page, per_page),
    )
    .map_err(ServiceError::from)
}

/// Paginated list of trips whose owners made them shareable.
pub fn list_public_trips<R>(
    repo: &R,
    page: usize,
    per_page: usize,
) -> ServiceResult<(usize, Vec<Trip>)>
where
    R: TripReader + ?Sized,
{
    repo.list_trips(TripListQuery::new().public_only().paginate(page, per_page))
        .map_err(ServiceError::from)
}

/// Fetches a trip detail, allowing the owner, an admin, or anyone when
/// the trip is public.
pub fn get_trip_detail<R>(
    repo: &R,
    trip_id: i32,
    viewer_email: &str,
    viewer_is_admin: bool,
) -> ServiceResult<TripDetail>
where
    R: TripReader + ?Sized,
{
    let detail = repo
        .get_trip_by_id(trip_id)?
        .ok_or(ServiceError::NotFound)?;

    if detail.trip.user_email != viewer_email && !viewer_is_admin && !detail.trip.is_public {
        return Err(ServiceError::Forbidden);
    }

    Ok(detail)
}

/// Fetches a publicly shared trip by its share id.
pub fn get_shared_trip<R>(repo: &R, public_id: &str) -> ServiceResult<TripDetail>
where
    R: TripReader + ?Sized,
{
    let detail = repo
        .get_trip_by_public_id(public_id)?
        .ok_or(ServiceError::NotFound)?;

    if !detail.trip.is_public {
        return Err(ServiceError::NotFound);
    }

    Ok(detail)
}

pub fn set_trip_visibility<R>(
    repo: &R,
    trip_id: i32,
    user_email: &str,
    is_public: bool,
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

    repo.set_trip_visibility(trip_id, is_public)
        .map_err(ServiceError::from)
}

pub fn delete_trip<R>(
    repo: &R,
    trip_id: i32,
    user_email: &str,
    user_is_admin: bool,
) -> ServiceResult<()>
where
    R: TripReader + TripWriter + ?Sized,
{
    let detail = repo
        .get_trip_by_id(trip_id)?
        .ok_or(ServiceError::NotFound)?;
    if detail.trip.user_email != user_email && !user_is_admin {
        return Err(ServiceError::Forbidden);
    }

    repo.delete_trip(trip_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::mock::MockRepository;

    fn detail(owner: &str, is_public: bool) -> TripDetail {
        TripDetail {
            trip: Trip {
                id: 1,
                user_email: owner.to_string(),
                public_id: uuid::Uuid::new_v4(),
                name: "Trip".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
                people_count: 2,
                trip_type: Default::default(),
                budget: Default::default(),
                notes: String::new(),
                packing_list: vec![],
                is_public,
                created_at: chrono::Utc::now().naive_utc(),
                updated_at: chrono::Utc::now().naive_utc(),
            },
            destinations: vec![],
            schedule: vec![],
        }
    }

    #[test]
    fn private_trip_is_hidden_from_strangers() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id()
            .returning(|_| Ok(Some(detail("owner@example.com", false))));

        let err = get_trip_detail(&repo, 1, "stranger@example.com", false).unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden));
    }

    #[test]
    fn public_trip_is_visible_to_anyone() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id()
            .returning(|_| Ok(Some(detail("owner@example.com", true))));

        let detail = get_trip_detail(&repo, 1, "stranger@example.com", false).unwrap();
        assert!(detail.trip.is_public);
    }

    #[test]
    fn public_listing_is_not_scoped_to_a_user() {
        let mut repo = MockRepository::new();
        repo.expect_list_trips()
            .withf(|query| query.public_only && query.user_email.is_none())
            .returning(|_| Ok((1, vec![detail("owner@example.com", true).trip])));

        let (total, trips) = list_public_trips(&repo, 1, 20).unwrap();
        assert_eq!(total, 1);
        assert!(trips[0].is_public);
    }

    #[test]
    fn shared_link_requires_public_flag() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_public_id()
            .returning(|_| Ok(Some(detail("owner@example.com", false))));

        let err = get_shared_trip(&repo, "some-uuid").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
