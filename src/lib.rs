use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::admin::{
    activity, add_alert, add_article, add_destination, alerts, articles, dashboard,
    delete_article, delete_destination, delete_trip as admin_delete_trip, delete_user,
    destinations as admin_destinations, edit_article, edit_destination, reviews, save_article,
    save_destination, trips as admin_trips, users,
};
use crate::routes::api::{api_v1_destinations, api_v1_shared_trip, api_v1_trips};
use crate::routes::main::{
    add_review, destinations, index, logout, not_assigned, show_article, show_destination,
};
use crate::routes::moderation::{
    acknowledge_alert, approve_review, delete_review, publish_article, reject_review,
    resolve_alert, unpublish_article,
};
use crate::routes::planner::{
    add_schedule_entry, edit_trip, new_trip, next_step, remove_schedule_entry,
    reorder_destinations, save_basic_info, save_budget, show_step, submit_trip,
    toggle_destination,
};
use crate::routes::trips::{delete_trip, my_trips, set_visibility, shared_trip, show_trip};

pub mod auth;
pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role required to plan and save trips.
pub const SERVICE_ACCESS_ROLE: &str = "trips";
/// Role required for the admin back-office.
pub const SERVICE_ADMIN_ROLE: &str = "trips_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            // Anonymous surface: marketing pages, share links, public API.
            .service(index)
            .service(destinations)
            .service(show_destination)
            .service(show_article)
            .service(shared_trip)
            .service(not_assigned)
            .service(
                web::scope("/api")
                    .service(api_v1_destinations)
                    .service(api_v1_trips)
                    .service(api_v1_shared_trip),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized::new(
                        server_config.auth_service_url.clone(),
                    ))
                    .service(add_review)
                    .service(new_trip)
                    .service(edit_trip)
                    .service(show_step)
                    .service(next_step)
                    .service(save_basic_info)
                    .service(toggle_destination)
                    .service(reorder_destinations)
                    .service(add_schedule_entry)
                    .service(remove_schedule_entry)
                    .service(save_budget)
                    .service(submit_trip)
                    .service(my_trips)
                    .service(show_trip)
                    .service(set_visibility)
                    .service(delete_trip)
                    .service(dashboard)
                    .service(admin_destinations)
                    .service(edit_destination)
                    .service(add_destination)
                    .service(save_destination)
                    .service(delete_destination)
                    .service(articles)
                    .service(edit_article)
                    .service(add_article)
                    .service(save_article)
                    .service(delete_article)
                    .service(publish_article)
                    .service(unpublish_article)
                    .service(reviews)
                    .service(approve_review)
                    .service(reject_review)
                    .service(delete_review)
                    .service(users)
                    .service(delete_user)
                    .service(admin_trips)
                    .service(admin_delete_trip)
                    .service(activity)
                    .service(alerts)
                    .service(add_alert)
                    .service(acknowledge_alert)
                    .service(resolve_alert)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
