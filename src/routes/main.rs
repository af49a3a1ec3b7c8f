//! Public marketing pages: home, destination catalog and articles.

use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::forms::reviews::AddReviewForm;
use crate::models::config::ServerConfig;
use crate::pagination::Paginated;
use crate::repository::{DestinationListQuery, DieselRepository, ReviewWriter};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, redirect, render_template, server_error,
};
use crate::services::catalog;

#[get("/")]
pub async fn index(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (highlight_destinations, articles) = match catalog::home_highlights(repo.as_ref()) {
        Ok(highlights) => highlights,
        Err(e) => return server_error("Failed to load home highlights", e),
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "index",
        &server_config.auth_service_url,
    );
    context.insert("destinations", &highlight_destinations);
    context.insert("articles", &articles);

    render_template(&tera, "main/index.html", &context)
}

#[derive(Deserialize)]
struct DestinationsQueryParams {
    q: Option<String>,
    category: Option<String>,
    page: Option<usize>,
}

#[get("/destinations")]
pub async fn destinations(
    params: web::Query<DestinationsQueryParams>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let q = params.q.as_deref().unwrap_or("").trim();
    let category = params.category.as_deref().unwrap_or("").trim();

    let mut query = DestinationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !q.is_empty() {
        query = query.search(q);
    }
    if !category.is_empty() {
        query = query.category(category);
    }

    let (total, items) = match catalog::list_destinations(repo.as_ref(), query) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list destinations", e),
    };
    let categories = match catalog::destination_categories(repo.as_ref()) {
        Ok(categories) => categories,
        Err(e) => return server_error("Failed to list categories", e),
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "destinations",
        &server_config.auth_service_url,
    );
    context.insert(
        "destinations",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );
    context.insert("categories", &categories);
    context.insert("search_query", q);
    context.insert("selected_category", category);

    render_template(&tera, "main/destinations.html", &context)
}

#[get("/destinations/{destination_id}")]
pub async fn show_destination(
    destination_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let detail = match catalog::get_destination_detail(repo.as_ref(), destination_id.into_inner())
    {
        Ok(detail) => detail,
        Err(crate::services::ServiceError::NotFound) => {
            FlashMessage::error("Destinasi tidak ditemukan.").send();
            return redirect("/destinations");
        }
        Err(e) => return server_error("Failed to load destination", e),
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "destinations",
        &server_config.auth_service_url,
    );
    context.insert("destination", &detail.destination);
    context.insert("activities", &detail.activities);
    context.insert("reviews", &detail.reviews);

    render_template(&tera, "main/destination.html", &context)
}

#[post("/destinations/{destination_id}/reviews")]
pub async fn add_review(
    destination_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddReviewForm>,
) -> impl Responder {
    let destination_id = destination_id.into_inner();

    if let Err(e) = form.validate() {
        log::error!("Failed to validate review form: {e}");
        FlashMessage::error("Ulasan tidak valid.").send();
        return redirect(&format!("/destinations/{destination_id}"));
    }

    let new_review = form.to_new_review(destination_id, &user.email);
    match repo.create_review(&new_review) {
        Ok(_) => {
            FlashMessage::success("Ulasan terkirim dan menunggu moderasi.").send();
        }
        Err(e) => {
            log::error!("Failed to create review: {e}");
            FlashMessage::error("Gagal mengirim ulasan.").send();
        }
    }

    redirect(&format!("/destinations/{destination_id}"))
}

#[get("/articles/{article_id}")]
pub async fn show_article(
    article_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let viewer_is_admin = user
        .as_ref()
        .is_some_and(|u| check_role(SERVICE_ADMIN_ROLE, &u.roles));

    let article = match catalog::get_article(repo.as_ref(), article_id.into_inner(), viewer_is_admin)
    {
        Ok(article) => article,
        Err(crate::services::ServiceError::NotFound) => {
            FlashMessage::error("Artikel tidak ditemukan.").send();
            return redirect("/");
        }
        Err(e) => return server_error("Failed to load article", e),
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "articles",
        &server_config.auth_service_url,
    );
    context.insert("article", &article);

    render_template(&tera, "main/article.html", &context)
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        Some(&user),
        "index",
        &server_config.auth_service_url,
    );

    render_template(&tera, "main/not_assigned.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
