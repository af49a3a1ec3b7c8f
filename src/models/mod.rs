//! Database models backing the repository layer.

pub mod activity_log;
pub mod alert;
pub mod article;
pub mod config;
pub mod destination;
pub mod review;
pub mod trip;
pub mod user;
