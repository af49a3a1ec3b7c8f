//! HTTP handlers and the small helpers they share.

use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::auth::{AuthenticatedUser, check_role};

pub mod admin;
pub mod api;
pub mod main;
pub mod moderation;
pub mod planner;
pub mod trips;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Maps flash levels to the CSS alert classes the templates use.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context fields every page template expects. Marketing pages render
/// for anonymous visitors too, so the user is optional.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    if let Some(user) = user {
        context.insert("current_user", user);
    }
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Rejects users without `role`, redirecting to `redirect_to` when given
/// or responding 403 otherwise.
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        return Ok(());
    }
    match redirect_to {
        Some(location) => Err(redirect(location)),
        None => Err(HttpResponse::Forbidden().finish()),
    }
}

/// 500 with a log line; the closing response for unexpected failures.
pub fn server_error(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    log::error!("{context}: {err}");
    HttpResponse::InternalServerError().finish()
}

