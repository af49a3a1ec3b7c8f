//! JSON API under `/api/v1`. Responses use the `{ data, meta }`
//! envelope from [`crate::dto::api`].

use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::dto::api::{Envelope, Meta};
use crate::dto::trips::TripView;
use crate::repository::{DestinationListQuery, DieselRepository};
use crate::routes::DEFAULT_ITEMS_PER_PAGE;
use crate::services::{ServiceError, catalog, trips};

#[derive(Deserialize)]
struct DestinationsQueryParams {
    q: Option<String>,
    category: Option<String>,
    page: Option<usize>,
}

#[get("/v1/destinations")]
pub async fn api_v1_destinations(
    params: web::Query<DestinationsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let mut query = DestinationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        query = query.search(q);
    }
    if let Some(category) = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        query = query.category(category);
    }

    match catalog::list_destinations(repo.as_ref(), query) {
        Ok((total, destinations)) => HttpResponse::Ok().json(Envelope::paginated(
            destinations,
            Meta::new(page, DEFAULT_ITEMS_PER_PAGE, total),
        )),
        Err(e) => {
            log::error!("Failed to list destinations: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
struct TripsQueryParams {
    page: Option<usize>,
}

/// Trips whose owners made them shareable; no authentication needed.
#[get("/v1/trips")]
pub async fn api_v1_trips(
    params: web::Query<TripsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    match trips::list_public_trips(repo.as_ref(), page, DEFAULT_ITEMS_PER_PAGE) {
        Ok((total, items)) => HttpResponse::Ok().json(Envelope::paginated(
            items,
            Meta::new(page, DEFAULT_ITEMS_PER_PAGE, total),
        )),
        Err(e) => {
            log::error!("Failed to list trips: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/trips/{public_id}")]
pub async fn api_v1_shared_trip(
    public_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match trips::get_shared_trip(repo.as_ref(), &public_id) {
        Ok(detail) => HttpResponse::Ok().json(Envelope::new(TripView::from(detail))),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to load shared trip: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
