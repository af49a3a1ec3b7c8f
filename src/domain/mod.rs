//! Domain entities and the trip-planning draft model.

pub mod activity_log;
pub mod alert;
pub mod article;
pub mod destination;
pub mod draft;
pub mod review;
pub mod trip;
pub mod user;
pub mod wizard;
