use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview, ReviewStatus};
use crate::models::destination::Destination;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Destination, foreign_key = destination_id))]
#[diesel(table_name = crate::schema::reviews)]
/// Diesel model for [`crate::domain::review::Review`].
pub struct Review {
    pub id: i32,
    pub destination_id: i32,
    pub author_email: String,
    pub rating: i32,
    pub comment: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub destination_id: i32,
    pub author_email: &'a str,
    pub rating: i32,
    pub comment: &'a str,
    pub status: String,
}

impl From<Review> for DomainReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            destination_id: review.destination_id,
            author_email: review.author_email,
            rating: review.rating,
            comment: review.comment,
            status: ReviewStatus::from(review.status.as_str()),
            created_at: review.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(review: &'a DomainNewReview) -> Self {
        Self {
            destination_id: review.destination_id,
            author_email: review.author_email.as_str(),
            rating: review.rating,
            comment: review.comment.as_str(),
            status: ReviewStatus::Pending.to_string(),
        }
    }
}
