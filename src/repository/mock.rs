//! Mock repository implementation for isolating services in tests.

use mockall::mock;

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
use crate::repository::{
    ActivityLogListQuery, ActivityLogReader, ActivityLogWriter, AlertListQuery, AlertReader,
    AlertWriter, ArticleListQuery, ArticleReader, ArticleWriter, DestinationListQuery,
    DestinationReader, DestinationWriter, ReviewListQuery, ReviewReader, ReviewWriter,
    TripListQuery, TripReader, TripWriter, UserListQuery, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl DestinationReader for Repository {
        fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>>;
        fn list_destinations(
            &self,
            query: DestinationListQuery,
        ) -> RepositoryResult<(usize, Vec<Destination>)>;
        fn list_destination_categories(&self) -> RepositoryResult<Vec<String>>;
        fn list_destination_activities(
            &self,
            destination_id: i32,
        ) -> RepositoryResult<Vec<DestinationActivity>>;
    }

    impl DestinationWriter for Repository {
        fn create_destination(
            &self,
            new_destination: &NewDestination,
        ) -> RepositoryResult<Destination>;
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

    impl ArticleReader for Repository {
        fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
        fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)>;
    }

    impl ArticleWriter for Repository {
        fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<Article>;
        fn update_article(
            &self,
            article_id: i32,
            updates: &UpdateArticle,
        ) -> RepositoryResult<Article>;
        fn set_article_published(
            &self,
            article_id: i32,
            published: bool,
        ) -> RepositoryResult<Article>;
        fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
    }

    impl ReviewReader for Repository {
        fn list_reviews(
            &self,
            query: ReviewListQuery,
        ) -> RepositoryResult<(usize, Vec<(Review, Destination)>)>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
        fn set_review_status(
            &self,
            review_id: i32,
            status: ReviewStatus,
        ) -> RepositoryResult<Review>;
        fn delete_review(&self, review_id: i32) -> RepositoryResult<()>;
    }

    impl UserReader for Repository {
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }

    impl UserWriter for Repository {
        fn create_or_update_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }

    impl TripReader for Repository {
        fn get_trip_by_id(&self, id: i32) -> RepositoryResult<Option<TripDetail>>;
        fn get_trip_by_public_id(&self, public_id: &str) -> RepositoryResult<Option<TripDetail>>;
        fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<Trip>)>;
    }

    impl TripWriter for Repository {
        fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip>;
        fn update_trip(&self, trip_id: i32, updates: &UpdateTrip) -> RepositoryResult<Trip>;
        fn set_trip_visibility(&self, trip_id: i32, is_public: bool) -> RepositoryResult<Trip>;
        fn delete_trip(&self, trip_id: i32) -> RepositoryResult<()>;
    }

    impl ActivityLogReader for Repository {
        fn list_activity_logs(
            &self,
            query: ActivityLogListQuery,
        ) -> RepositoryResult<(usize, Vec<ActivityLog>)>;
    }

    impl ActivityLogWriter for Repository {
        fn log_activity(&self, new_log: &NewActivityLog) -> RepositoryResult<ActivityLog>;
    }

    impl AlertReader for Repository {
        fn list_alerts(&self, query: AlertListQuery) -> RepositoryResult<(usize, Vec<Alert>)>;
    }

    impl AlertWriter for Repository {
        fn create_alert(&self, new_alert: &NewAlert) -> RepositoryResult<Alert>;
        fn set_alert_status(&self, alert_id: i32, status: AlertStatus) -> RepositoryResult<Alert>;
    }
}
