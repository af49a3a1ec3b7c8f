//! Repository traits and their Diesel/SQLite implementation.
//!
//! Routes and services depend on the reader/writer traits only, so tests
//! can swap in the mockall-backed [`mock::MockRepository`].

use crate::db::DbPool;
use crate::domain::activity_log::{ActivityLog, NewActivityLog};
use crate::domain::alert::{Alert, AlertStatus, NewAlert};
use crate::domain::article::{Article, NewArticle, UpdateArticle};
use crate::domain::destination::{
    Destination, DestinationActivity, NewDestination, NewDestinationActivity, UpdateDestination,
};
use crate::domain::review::{NewReview, Review, ReviewStatus};
use crate::domain::trip::{NewTrip, Trip, TripDetail, UpdateTrip};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod activity_log;
pub mod alert;
pub mod article;
pub mod destination;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod review;
pub mod trip;
pub mod user;

/// Diesel implementation of every repository trait in this module.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

macro_rules! paginate_builder {
    () => {
        pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
            self.pagination = Some(Pagination { page, per_page });
            self
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct DestinationListQuery {
    /// Substring match on name and location.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    pub pagination: Option<Pagination>,
}

impl DestinationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    pub published_only: bool,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published_only(mut self) -> Self {
        self.published_only = true;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct ReviewListQuery {
    pub destination_id: Option<i32>,
    pub status: Option<ReviewStatus>,
    pub pagination: Option<Pagination>,
}

impl ReviewListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(mut self, destination_id: i32) -> Self {
        self.destination_id = Some(destination_id);
        self
    }

    pub fn status(mut self, status: ReviewStatus) -> Self {
        self.status = Some(status);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct TripListQuery {
    pub user_email: Option<String>,
    pub public_only: bool,
    pub pagination: Option<Pagination>,
}

impl TripListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    pub fn public_only(mut self) -> Self {
        self.public_only = true;
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLogListQuery {
    pub pagination: Option<Pagination>,
}

impl ActivityLogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct AlertListQuery {
    pub status: Option<AlertStatus>,
    pub pagination: Option<Pagination>,
}

impl AlertListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = Some(status);
        self
    }

    paginate_builder!();
}

pub trait DestinationReader {
    fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>>;
    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<Destination>)>;
    /// Distinct categories present in the catalog, for filter options.
    fn list_destination_categories(&self) -> RepositoryResult<Vec<String>>;
    fn list_destination_activities(
        &self,
        destination_id: i32,
    ) -> RepositoryResult<Vec<DestinationActivity>>;
}

pub trait DestinationWriter {
    fn create_destination(&self, new_destination: &NewDestination)
    -> RepositoryResult<Destination>;
    fn update_destination(
        &self,
        destination_id: i32,
        updates: &UpdateDestination,
    ) -> RepositoryResult<Destination>;
    fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()>;
    fn replace_destination_activities(
        &self,
        destination_id: i32,
        activities: &[NewDestinationActivity],
    ) -> RepositoryResult<usize>;
}

pub trait ArticleReader {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)>;
}

pub trait ArticleWriter {
    fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<Article>;
    fn update_article(&self, article_id: i32, updates: &UpdateArticle)
    -> RepositoryResult<Article>;
    fn set_article_published(&self, article_id: i32, published: bool) -> RepositoryResult<Article>;
    fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
}

pub trait ReviewReader {
    fn list_reviews(
        &self,
        query: ReviewListQuery,
    ) -> RepositoryResult<(usize, Vec<(Review, Destination)>)>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    fn set_review_status(&self, review_id: i32, status: ReviewStatus) -> RepositoryResult<Review>;
    fn delete_review(&self, review_id: i32) -> RepositoryResult<()>;
}

pub trait UserReader {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}

pub trait UserWriter {
    fn create_or_update_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

pub trait TripReader {
    fn get_trip_by_id(&self, id: i32) -> RepositoryResult<Option<TripDetail>>;
    fn get_trip_by_public_id(&self, public_id: &str) -> RepositoryResult<Option<TripDetail>>;
    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<Trip>)>;
}

pub trait TripWriter {
    fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip>;
    fn update_trip(&self, trip_id: i32, updates: &UpdateTrip) -> RepositoryResult<Trip>;
    fn set_trip_visibility(&self, trip_id: i32, is_public: bool) -> RepositoryResult<Trip>;
    fn delete_trip(&self, trip_id: i32) -> RepositoryResult<()>;
}

pub trait ActivityLogReader {
    fn list_activity_logs(
        &self,
        query: ActivityLogListQuery,
    ) -> RepositoryResult<(usize, Vec<ActivityLog>)>;
}

pub trait ActivityLogWriter {
    fn log_activity(&self, new_log: &NewActivityLog) -> RepositoryResult<ActivityLog>;
}

pub trait AlertReader {
    fn list_alerts(&self, query: AlertListQuery) -> RepositoryResult<(usize, Vec<Alert>)>;
}

pub trait AlertWriter {
    fn create_alert(&self, new_alert: &NewAlert) -> RepositoryResult<Alert>;
    fn set_alert_status(&self, alert_id: i32, status: AlertStatus) -> RepositoryResult<Alert>;
}
