//! Saved trips: the user's list, the detail page and the share link.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::auth::{AuthenticatedUser, check_role};
use crate::dto::trips::TripView;
use crate::forms::trips::SetVisibilityForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_role, redirect, render_template, server_error,
};
use crate::services::{ServiceError, trips};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};
use crate::pagination::Paginated;

#[derive(Deserialize)]
struct TripsQueryParams {
    page: Option<usize>,
}

#[get("/trips")]
pub async fn my_trips(
    params: web::Query<TripsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let (total, items) =
        match trips::list_user_trips(repo.as_ref(), &user.email, page, DEFAULT_ITEMS_PER_PAGE) {
            Ok(result) => result,
            Err(e) => return server_error("Failed to list trips", e),
        };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "trips",
        &server_config.auth_service_url,
    );
    context.insert(
        "trips",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );

    render_template(&tera, "trips/index.html", &context)
}

#[get("/trips/{trip_id}")]
pub async fn show_trip(
    trip_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let viewer_is_admin = check_role(SERVICE_ADMIN_ROLE, &user.roles);
    let detail = match trips::get_trip_detail(
        repo.as_ref(),
        trip_id.into_inner(),
        &user.email,
        viewer_is_admin,
    ) {
        Ok(detail) => detail,
        Err(ServiceError::NotFound) | Err(ServiceError::Forbidden) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
            return redirect("/trips");
        }
        Err(e) => return server_error("Failed to load trip", e),
    };

    let is_owner = detail.trip.user_email == user.email;
    let view = TripView::from(detail);

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "trips",
        &server_config.auth_service_url,
    );
    context.insert("trip", &view);
    context.insert("is_owner", &is_owner);

    render_template(&tera, "trips/show.html", &context)
}

#[post("/trips/{trip_id}/visibility")]
pub async fn set_visibility(
    trip_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetVisibilityForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let trip_id = trip_id.into_inner();
    match trips::set_trip_visibility(repo.as_ref(), trip_id, &user.email, form.is_public()) {
        Ok(trip) if trip.is_public => {
            FlashMessage::success("Perjalanan kini dapat dibagikan.").send();
        }
        Ok(_) => {
            FlashMessage::success("Perjalanan kembali privat.").send();
        }
        Err(ServiceError::NotFound) | Err(ServiceError::Forbidden) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
            return redirect("/trips");
        }
        Err(e) => return server_error("Failed to change trip visibility", e),
    }

    redirect(&format!("/trips/{trip_id}"))
}

#[post("/trips/{trip_id}/delete")]
pub async fn delete_trip(
    trip_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let viewer_is_admin = check_role(SERVICE_ADMIN_ROLE, &user.roles);
    match trips::delete_trip(repo.as_ref(), trip_id.into_inner(), &user.email, viewer_is_admin) {
        Ok(()) => {
            FlashMessage::success("Perjalanan dihapus.").send();
        }
        Err(ServiceError::NotFound) | Err(ServiceError::Forbidden) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete trip", e),
    }

    redirect("/trips")
}

/// Read-only shared itinerary, reachable without signing in.
#[get("/t/{public_id}")]
pub async fn shared_trip(
    public_id: web::Path<String>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let detail = match trips::get_shared_trip(repo.as_ref(), &public_id) {
        Ok(detail) => detail,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Tautan perjalanan tidak ditemukan.").send();
            return redirect("/");
        }
        Err(e) => return server_error("Failed to load shared trip", e),
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "trips",
        &server_config.auth_service_url,
    );
    context.insert("trip", &TripView::from(detail));

    render_template(&tera, "trips/shared.html", &context)
}
