//! Moderation actions: review approval, article publishing and the
//! alert lifecycle. Each action posts to its own sub-path and records
//! an activity log entry through the admin service.

use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::SERVICE_ADMIN_ROLE;
use crate::auth::AuthenticatedUser;
use crate::domain::alert::AlertStatus;
use crate::domain::review::ReviewStatus;
use crate::repository::DieselRepository;
use crate::routes::{ensure_role, redirect, server_error};
use crate::services::{ServiceError, admin};

#[post("/admin/reviews/{review_id}/approve")]
pub async fn approve_review(
    review_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    moderate(repo, &user, review_id.into_inner(), ReviewStatus::Approved)
}

#[post("/admin/reviews/{review_id}/reject")]
pub async fn reject_review(
    review_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    moderate(repo, &user, review_id.into_inner(), ReviewStatus::Rejected)
}

fn moderate(
    repo: web::Data<DieselRepository>,
    user: &AuthenticatedUser,
    review_id: i32,
    status: ReviewStatus,
) -> actix_web::HttpResponse {
    if let Err(response) = ensure_role(user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::moderate_review(repo.as_ref(), &user.email, review_id, status) {
        Ok(_) => {
            let message = match status {
                ReviewStatus::Approved => "Ulasan disetujui.",
                ReviewStatus::Rejected => "Ulasan ditolak.",
                ReviewStatus::Pending => "Ulasan dikembalikan ke antrean.",
            };
            FlashMessage::success(message).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Ulasan tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to moderate review", e),
    }

    redirect("/admin/reviews")
}

#[post("/admin/reviews/{review_id}/delete")]
pub async fn delete_review(
    review_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::delete_review(repo.as_ref(), &user.email, review_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Ulasan dihapus.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Ulasan tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete review", e),
    }

    redirect("/admin/reviews")
}

#[post("/admin/articles/{article_id}/publish")]
pub async fn publish_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    set_published(repo, &user, article_id.into_inner(), true)
}

#[post("/admin/articles/{article_id}/unpublish")]
pub async fn unpublish_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    set_published(repo, &user, article_id.into_inner(), false)
}

fn set_published(
    repo: web::Data<DieselRepository>,
    user: &AuthenticatedUser,
    article_id: i32,
    published: bool,
) -> actix_web::HttpResponse {
    if let Err(response) = ensure_role(user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::set_article_published(repo.as_ref(), &user.email, article_id, published) {
        Ok(_) if published => {
            FlashMessage::success("Artikel dipublikasikan.").send();
        }
        Ok(_) => {
            FlashMessage::success("Artikel ditarik dari publikasi.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Artikel tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to change article publication", e),
    }

    redirect("/admin/articles")
}

#[post("/admin/alerts/{alert_id}/acknowledge")]
pub async fn acknowledge_alert(
    alert_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    advance_alert(repo, &user, alert_id.into_inner(), AlertStatus::Acknowledged)
}

#[post("/admin/alerts/{alert_id}/resolve")]
pub async fn resolve_alert(
    alert_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    advance_alert(repo, &user, alert_id.into_inner(), AlertStatus::Resolved)
}

fn advance_alert(
    repo: web::Data<DieselRepository>,
    user: &AuthenticatedUser,
    alert_id: i32,
    status: AlertStatus,
) -> actix_web::HttpResponse {
    if let Err(response) = ensure_role(user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::set_alert_status(repo.as_ref(), &user.email, alert_id, status) {
        Ok(_) => {
            FlashMessage::success("Status peringatan diperbarui.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Peringatan tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to update alert", e),
    }

    redirect("/admin/alerts")
}
