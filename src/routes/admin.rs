//! Back-office pages and CRUD actions. Everything here requires the
//! admin role.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::auth::AuthenticatedUser;
use crate::domain::review::ReviewStatus;
use crate::models::config::ServerConfig;
use crate::pagination::Paginated;
use crate::repository::{
    ActivityLogListQuery, AlertListQuery, ArticleListQuery, DestinationListQuery,
    DestinationReader, DieselRepository, ReviewListQuery, TripListQuery, UserListQuery,
};
use crate::forms::admin::{CreateAlertForm, SaveArticleForm, SaveDestinationForm};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_role, redirect, render_template, server_error,
};
use crate::services::{ServiceError, admin, catalog};

#[derive(Deserialize)]
struct PageQueryParams {
    page: Option<usize>,
    q: Option<String>,
}

#[get("/admin")]
pub async fn dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let (_total, active_alerts) = match admin::list_alerts(
        repo.as_ref(),
        AlertListQuery::new().status(crate::domain::alert::AlertStatus::Active),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list alerts", e),
    };
    let (_total, recent_activity) = match admin::list_activity_logs(
        repo.as_ref(),
        ActivityLogListQuery::new().paginate(1, 10),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list activity", e),
    };
    let (pending_reviews, _) = match admin::list_reviews(
        repo.as_ref(),
        ReviewListQuery::new().status(ReviewStatus::Pending).paginate(1, 1),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to count pending reviews", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert("active_alerts", &active_alerts);
    context.insert("recent_activity", &recent_activity);
    context.insert("pending_reviews", &pending_reviews);

    render_template(&tera, "admin/dashboard.html", &context)
}

#[get("/admin/destinations")]
pub async fn destinations(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let q = params.q.as_deref().unwrap_or("").trim();
    let mut query = DestinationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !q.is_empty() {
        query = query.search(q);
    }

    let (total, items) = match catalog::list_destinations(repo.as_ref(), query) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list destinations", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "destinations",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );
    context.insert("search_query", q);

    render_template(&tera, "admin/destinations.html", &context)
}

#[get("/admin/destinations/{destination_id}")]
pub async fn edit_destination(
    destination_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let destination_id = destination_id.into_inner();
    let destination = match repo.get_destination_by_id(destination_id) {
        Ok(Some(destination)) => destination,
        Ok(None) => {
            FlashMessage::error("Destinasi tidak ditemukan.").send();
            return redirect("/admin/destinations");
        }
        Err(e) => return server_error("Failed to load destination", e),
    };
    let activities = match repo.list_destination_activities(destination_id) {
        Ok(activities) => activities,
        Err(e) => return server_error("Failed to list activities", e),
    };
    let activities_text = activities
        .iter()
        .map(|a| format!("{}|{}|{}", a.label, a.start_time, a.end_time))
        .collect::<Vec<_>>()
        .join("\n");

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert("destination", &destination);
    context.insert("activities_text", &activities_text);

    render_template(&tera, "admin/destination_form.html", &context)
}

#[post("/admin/destinations/add")]
pub async fn add_destination(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveDestinationForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate destination form: {e}");
        FlashMessage::error("Formulir destinasi tidak valid.").send();
        return redirect("/admin/destinations");
    }
    let activities = match form.parse_activities() {
        Ok(activities) => activities,
        Err(e) => {
            FlashMessage::error(e).send();
            return redirect("/admin/destinations");
        }
    };

    match admin::create_destination(repo.as_ref(), &user.email, &(&form).into(), &activities) {
        Ok(_) => {
            FlashMessage::success("Destinasi ditambahkan.").send();
        }
        Err(e) => {
            log::error!("Failed to create destination: {e}");
            FlashMessage::error("Gagal menambahkan destinasi.").send();
        }
    }

    redirect("/admin/destinations")
}

#[post("/admin/destinations/{destination_id}/save")]
pub async fn save_destination(
    destination_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveDestinationForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let destination_id = destination_id.into_inner();
    let back = format!("/admin/destinations/{destination_id}");

    if let Err(e) = form.validate() {
        log::error!("Failed to validate destination form: {e}");
        FlashMessage::error("Formulir destinasi tidak valid.").send();
        return redirect(&back);
    }
    let activities = match form.parse_activities() {
        Ok(activities) => activities,
        Err(e) => {
            FlashMessage::error(e).send();
            return redirect(&back);
        }
    };

    match admin::update_destination(
        repo.as_ref(),
        &user.email,
        destination_id,
        &(&form).into(),
        &activities,
    ) {
        Ok(_) => {
            FlashMessage::success("Destinasi diperbarui.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Destinasi tidak ditemukan.").send();
            return redirect("/admin/destinations");
        }
        Err(e) => {
            log::error!("Failed to update destination: {e}");
            FlashMessage::error("Gagal memperbarui destinasi.").send();
        }
    }

    redirect(&back)
}

#[post("/admin/destinations/{destination_id}/delete")]
pub async fn delete_destination(
    destination_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::delete_destination(repo.as_ref(), &user.email, destination_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Destinasi dihapus.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Destinasi tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete destination", e),
    }

    redirect("/admin/destinations")
}

#[get("/admin/articles")]
pub async fn articles(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let q = params.q.as_deref().unwrap_or("").trim();
    let mut query = ArticleListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !q.is_empty() {
        query = query.search(q);
    }

    let (total, items) = match admin::list_articles(repo.as_ref(), query) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list articles", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "articles",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );
    context.insert("search_query", q);

    render_template(&tera, "admin/articles.html", &context)
}

#[get("/admin/articles/{article_id}")]
pub async fn edit_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let article = match catalog::get_article(repo.as_ref(), article_id.into_inner(), true) {
        Ok(article) => article,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Artikel tidak ditemukan.").send();
            return redirect("/admin/articles");
        }
        Err(e) => return server_error("Failed to load article", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert("article", &article);

    render_template(&tera, "admin/article_form.html", &context)
}

#[post("/admin/articles/add")]
pub async fn add_article(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveArticleForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate article form: {e}");
        FlashMessage::error("Formulir artikel tidak valid.").send();
        return redirect("/admin/articles");
    }

    match admin::create_article(repo.as_ref(), &user.email, &form.to_new_article(&user.email)) {
        Ok(_) => {
            FlashMessage::success("Artikel dibuat sebagai draf.").send();
        }
        Err(e) => {
            log::error!("Failed to create article: {e}");
            FlashMessage::error("Gagal membuat artikel.").send();
        }
    }

    redirect("/admin/articles")
}

#[post("/admin/articles/{article_id}/save")]
pub async fn save_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveArticleForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let article_id = article_id.into_inner();
    let back = format!("/admin/articles/{article_id}");

    if let Err(e) = form.validate() {
        log::error!("Failed to validate article form: {e}");
        FlashMessage::error("Formulir artikel tidak valid.").send();
        return redirect(&back);
    }

    match admin::update_article(repo.as_ref(), &user.email, article_id, &form.to_update_article())
    {
        Ok(_) => {
            FlashMessage::success("Artikel diperbarui.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Artikel tidak ditemukan.").send();
            return redirect("/admin/articles");
        }
        Err(e) => {
            log::error!("Failed to update article: {e}");
            FlashMessage::error("Gagal memperbarui artikel.").send();
        }
    }

    redirect(&back)
}

#[post("/admin/articles/{article_id}/delete")]
pub async fn delete_article(
    article_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::delete_article(repo.as_ref(), &user.email, article_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Artikel dihapus.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Artikel tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete article", e),
    }

    redirect("/admin/articles")
}

#[derive(Deserialize)]
struct ReviewsQueryParams {
    page: Option<usize>,
    status: Option<String>,
}

#[get("/admin/reviews")]
pub async fn reviews(
    params: web::Query<ReviewsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let mut query = ReviewListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    let status = params.status.as_deref().unwrap_or("");
    if !status.is_empty() {
        query = query.status(ReviewStatus::from(status));
    }

    let (total, items) = match admin::list_reviews(repo.as_ref(), query) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list reviews", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "reviews",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );
    context.insert("selected_status", status);

    render_template(&tera, "admin/reviews.html", &context)
}

#[get("/admin/users")]
pub async fn users(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let q = params.q.as_deref().unwrap_or("").trim();
    let mut query = UserListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !q.is_empty() {
        query = query.search(q);
    }

    let (total, items) = match admin::list_users(repo.as_ref(), query) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list users", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "users",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );
    context.insert("search_query", q);

    render_template(&tera, "admin/users.html", &context)
}

#[post("/admin/users/{user_id}/delete")]
pub async fn delete_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::delete_user(repo.as_ref(), &user.email, user_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Pengguna dihapus.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Pengguna tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete user", e),
    }

    redirect("/admin/users")
}

#[get("/admin/trips")]
pub async fn trips(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let (total, items) = match admin::list_trips(
        repo.as_ref(),
        TripListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list trips", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "trips",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );

    render_template(&tera, "admin/trips.html", &context)
}

#[post("/admin/trips/{trip_id}/delete")]
pub async fn delete_trip(
    trip_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match admin::delete_trip(repo.as_ref(), &user.email, trip_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Perjalanan dihapus.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
        }
        Err(e) => return server_error("Failed to delete trip", e),
    }

    redirect("/admin/trips")
}

#[get("/admin/activity")]
pub async fn activity(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let (total, items) = match admin::list_activity_logs(
        repo.as_ref(),
        ActivityLogListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list activity", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "logs",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );

    render_template(&tera, "admin/activity.html", &context)
}

#[get("/admin/alerts")]
pub async fn alerts(
    params: web::Query<PageQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let (total, items) = match admin::list_alerts(
        repo.as_ref(),
        AlertListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok(result) => result,
        Err(e) => return server_error("Failed to list alerts", e),
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "admin",
        &server_config.auth_service_url,
    );
    context.insert(
        "alerts_list",
        &Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE)),
    );

    render_template(&tera, "admin/alerts.html", &context)
}

#[post("/admin/alerts/add")]
pub async fn add_alert(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CreateAlertForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate alert form: {e}");
        FlashMessage::error("Pesan peringatan tidak boleh kosong.").send();
        return redirect("/admin/alerts");
    }

    match admin::create_alert(repo.as_ref(), &(&form).into()) {
        Ok(_) => {
            FlashMessage::success("Peringatan dibuat.").send();
        }
        Err(e) => {
            log::error!("Failed to create alert: {e}");
            FlashMessage::error("Gagal membuat peringatan.").send();
        }
    }

    redirect("/admin/alerts")
}
