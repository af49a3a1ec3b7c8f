//! Read services for the public marketing pages.

use crate::domain::article::Article;
use crate::domain::destination::{Destination, DestinationActivity};
use crate::domain::review::{Review, ReviewStatus};
use crate::repository::{
    ArticleListQuery, ArticleReader, DestinationListQuery, DestinationReader, ReviewListQuery,
    ReviewReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Everything the destination detail page needs.
pub struct DestinationDetail {
    pub destination: Destination,
    pub activities: Vec<DestinationActivity>,
    /// Approved reviews only.
    pub reviews: Vec<Review>,
}

pub fn list_destinations<R>(
    repo: &R,
    query: DestinationListQuery,
) -> ServiceResult<(usize, Vec<Destination>)>
where
    R: DestinationReader + ?Sized,
{
    repo.list_destinations(query).map_err(ServiceError::from)
}

pub fn destination_categories<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: DestinationReader + ?Sized,
{
    repo.list_destination_categories()
        .map_err(ServiceError::from)
}

pub fn get_destination_detail<R>(repo: &R, destination_id: i32) -> ServiceResult<DestinationDetail>
where
    R: DestinationReader + ReviewReader + ?Sized,
{
    let destination = repo
        .get_destination_by_id(destination_id)?
        .ok_or(ServiceError::NotFound)?;
    let activities = repo.list_destination_activities(destination_id)?;
    let (_total, reviews) = repo.list_reviews(
        ReviewListQuery::new()
            .destination(destination_id)
            .status(ReviewStatus::Approved),
    )?;

    Ok(DestinationDetail {
        destination,
        activities,
        reviews: reviews.into_iter().map(|(review, _)| review).collect(),
    })
}

/// Home page data: the best rated destinations and the latest published
/// articles.
pub fn home_highlights<R>(repo: &R) -> ServiceResult<(Vec<Destination>, Vec<Article>)>
where
    R: DestinationReader + ArticleReader + ?Sized,
{
    let (_total, mut destinations) = repo.list_destinations(DestinationListQuery::new())?;
    destinations.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    destinations.truncate(6);

    let (_total, articles) =
        repo.list_articles(ArticleListQuery::new().published_only().paginate(1, 3))?;

    Ok((destinations, articles))
}

/// Fetches an article for public display; unpublished articles stay
/// hidden unless the viewer is an admin.
pub fn get_article<R>(repo: &R, article_id: i32, viewer_is_admin: bool) -> ServiceResult<Article>
where
    R: ArticleReader + ?Sized,
{
    let article = repo
        .get_article_by_id(article_id)?
        .ok_or(ServiceError::NotFound)?;

    if !article.published && !viewer_is_admin {
        return Err(ServiceError::NotFound);
    }

    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn article(published: bool) -> Article {
        Article {
            id: 1,
            title: "Judul".to_string(),
            body: "<p>isi</p>".to_string(),
            image_url: None,
            author: "admin@example.com".to_string(),
            published,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn unpublished_article_is_hidden_from_visitors() {
        let mut repo = MockRepository::new();
        repo.expect_get_article_by_id()
            .returning(|_| Ok(Some(article(false))));

        assert!(matches!(
            get_article(&repo, 1, false),
            Err(ServiceError::NotFound)
        ));
        assert!(get_article(&repo, 1, true).is_ok());
    }
}
