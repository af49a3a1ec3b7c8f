//! Admin back-office operations. Every mutating action is recorded in
//! the activity log under the acting admin's email.

use crate::domain::activity_log::{ActivityLog, NewActivityLog};
use crate::domain::alert::{Alert, AlertStatus, NewAlert};
use crate::domain::article::{Article, NewArticle, UpdateArticle};
use crate::domain::destination::{Destination, NewDestination, NewDestinationActivity, UpdateDestination};
use crate::domain::review::{Review, ReviewStatus};
use crate::domain::trip::Trip;
use crate::domain::user::User;
use crate::repository::{
    ActivityLogListQuery, ActivityLogReader, ActivityLogWriter, AlertListQuery, AlertReader,
    AlertWriter, ArticleListQuery, ArticleReader, ArticleWriter, DestinationWriter,
    ReviewListQuery, ReviewReader, ReviewWriter, TripListQuery, TripReader, TripWriter,
    UserListQuery, UserReader, UserWriter,
};
use crate::services::{ServiceError, ServiceResult};

fn record<R>(repo: &R, actor_email: &str, action: &str, entity: &str, entity_id: Option<i32>)
where
    R: ActivityLogWriter + ?Sized,
{
    // A failed log entry must not undo the action it describes.
    if let Err(e) = repo.log_activity(&NewActivityLog::new(actor_email, action, entity, entity_id))
    {
        log::error!("Failed to record admin activity: {e}");
    }
}

pub fn create_destination<R>(
    repo: &R,
    actor_email: &str,
    new_destination: &NewDestination,
    activities: &[NewDestinationActivity],
) -> ServiceResult<Destination>
where
    R: DestinationWriter + ActivityLogWriter + ?Sized,
{
    let destination = repo.create_destination(new_destination)?;
    repo.replace_destination_activities(destination.id, activities)?;
    record(repo, actor_email, "create", "destination", Some(destination.id));
    Ok(destination)
}

pub fn update_destination<R>(
    repo: &R,
    actor_email: &str,
    destination_id: i32,
    updates: &UpdateDestination,
    activities: &[NewDestinationActivity],
) -> ServiceResult<Destination>
where
    R: DestinationWriter + ActivityLogWriter + ?Sized,
{
    let destination = repo.update_destination(destination_id, updates)?;
    repo.replace_destination_activities(destination_id, activities)?;
    record(repo, actor_email, "update", "destination", Some(destination_id));
    Ok(destination)
}

pub fn delete_destination<R>(repo: &R, actor_email: &str, destination_id: i32) -> ServiceResult<()>
where
    R: DestinationWriter + ActivityLogWriter + ?Sized,
{
    repo.delete_destination(destination_id)?;
    record(repo, actor_email, "delete", "destination", Some(destination_id));
    Ok(())
}

pub fn list_articles<R>(repo: &R, query: ArticleListQuery) -> ServiceResult<(usize, Vec<Article>)>
where
    R: ArticleReader + ?Sized,
{
    repo.list_articles(query).map_err(ServiceError::from)
}

pub fn create_article<R>(
    repo: &R,
    actor_email: &str,
    new_article: &NewArticle,
) -> ServiceResult<Article>
where
    R: ArticleWriter + ActivityLogWriter + ?Sized,
{
    let article = repo.create_article(new_article)?;
    record(repo, actor_email, "create", "article", Some(article.id));
    Ok(article)
}

pub fn update_article<R>(
    repo: &R,
    actor_email: &str,
    article_id: i32,
    updates: &UpdateArticle,
) -> ServiceResult<Article>
where
    R: ArticleWriter + ActivityLogWriter + ?Sized,
{
    let article = repo.update_article(article_id, updates)?;
    record(repo, actor_email, "update", "article", Some(article_id));
    Ok(article)
}

/// Publish or unpublish an article via its dedicated moderation action.
pub fn set_article_published<R>(
    repo: &R,
    actor_email: &str,
    article_id: i32,
    published: bool,
) -> ServiceResult<Article>
where
    R: ArticleWriter + ActivityLogWriter + ?Sized,
{
    let article = repo.set_article_published(article_id, published)?;
    let action = if published { "publish" } else { "unpublish" };
    record(repo, actor_email, action, "article", Some(article_id));
    Ok(article)
}

pub fn delete_article<R>(repo: &R, actor_email: &str, article_id: i32) -> ServiceResult<()>
where
    R: ArticleWriter + ActivityLogWriter + ?Sized,
{
    repo.delete_article(article_id)?;
    record(repo, actor_email, "delete", "article", Some(article_id));
    Ok(())
}

pub fn list_reviews<R>(
    repo: &R,
    query: ReviewListQuery,
) -> ServiceResult<(usize, Vec<(Review, Destination)>)>
where
    R: ReviewReader + ?Sized,
{
    repo.list_reviews(query).map_err(ServiceError::from)
}

/// Approve or reject a pending review.
pub fn moderate_review<R>(
    repo: &R,
    actor_email: &str,
    review_id: i32,
    status: ReviewStatus,
) -> ServiceResult<Review>
where
    R: ReviewWriter + ActivityLogWriter + ?Sized,
{
    let review = repo.set_review_status(review_id, status)?;
    record(repo, actor_email, status.as_str(), "review", Some(review_id));
    Ok(review)
}

pub fn delete_review<R>(repo: &R, actor_email: &str, review_id: i32) -> ServiceResult<()>
where
    R: ReviewWriter + ActivityLogWriter + ?Sized,
{
    repo.delete_review(review_id)?;
    record(repo, actor_email, "delete", "review", Some(review_id));
    Ok(())
}

pub fn list_users<R>(repo: &R, query: UserListQuery) -> ServiceResult<(usize, Vec<User>)>
where
    R: UserReader + ?Sized,
{
    repo.list_users(query).map_err(ServiceError::from)
}

pub fn delete_user<R>(repo: &R, actor_email: &str, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ActivityLogWriter + ?Sized,
{
    repo.delete_user(user_id)?;
    record(repo, actor_email, "delete", "user", Some(user_id));
    Ok(())
}

pub fn list_trips<R>(repo: &R, query: TripListQuery) -> ServiceResult<(usize, Vec<Trip>)>
where
    R: TripReader + ?Sized,
{
    repo.list_trips(query).map_err(ServiceError::from)
}

pub fn delete_trip<R>(repo: &R, actor_email: &str, trip_id: i32) -> ServiceResult<()>
where
    R: TripWriter + ActivityLogWriter + ?Sized,
{
    repo.delete_trip(trip_id)?;
    record(repo, actor_email, "delete", "trip", Some(trip_id));
    Ok(())
}

pub fn list_activity_logs<R>(
    repo: &R,
    query: ActivityLogListQuery,
) -> ServiceResult<(usize, Vec<ActivityLog>)>
where
    R: ActivityLogReader + ?Sized,
{
    repo.list_activity_logs(query).map_err(ServiceError::from)
}

pub fn list_alerts<R>(repo: &R, query: AlertListQuery) -> ServiceResult<(usize, Vec<Alert>)>
where
    R: AlertReader + ?Sized,
{
    repo.list_alerts(query).map_err(ServiceError::from)
}

pub fn create_alert<R>(repo: &R, new_alert: &NewAlert) -> ServiceResult<Alert>
where
    R: AlertWriter + ?Sized,
{
    repo.create_alert(new_alert).map_err(ServiceError::from)
}

/// Move an alert through its lifecycle (acknowledge or resolve).
pub fn set_alert_status<R>(
    repo: &R,
    actor_email: &str,
    alert_id: i32,
    status: AlertStatus,
) -> ServiceResult<Alert>
where
    R: AlertWriter + ActivityLogWriter + ?Sized,
{
    let alert = repo.set_alert_status(alert_id, status)?;
    record(repo, actor_email, status.as_str(), "alert", Some(alert_id));
    Ok(alert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn moderation_records_activity() {
        let mut repo = MockRepository::new();
        repo.expect_set_review_status().returning(|id, status| {
            Ok(Review {
                id,
                destination_id: 1,
                author_email: "user@example.com".to_string(),
                rating: 4,
                comment: "Bagus".to_string(),
                status,
                created_at: chrono::Utc::now().naive_utc(),
            })
        });
        repo.expect_log_activity()
            .withf(|log| {
                log.actor_email == "admin@example.com"
                    && log.action == "approved"
                    && log.entity == "review"
                    && log.entity_id == Some(9)
            })
            .times(1)
            .returning(|log| {
                Ok(ActivityLog {
                    id: 1,
                    actor_email: log.actor_email.clone(),
                    action: log.action.clone(),
                    entity: log.entity.clone(),
                    entity_id: log.entity_id,
                    created_at: chrono::Utc::now().naive_utc(),
                })
            });

        let review =
            moderate_review(&repo, "admin@example.com", 9, ReviewStatus::Approved).unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);
    }

    #[test]
    fn failed_log_does_not_fail_the_action() {
        let mut repo = MockRepository::new();
        repo.expect_delete_article().returning(|_| Ok(()));
        repo.expect_log_activity().returning(|_| {
            Err(crate::repository::errors::RepositoryError::DatabaseError(
                "disk full".to_string(),
            ))
        });

        assert!(delete_article(&repo, "admin@example.com", 3).is_ok());
    }
}
