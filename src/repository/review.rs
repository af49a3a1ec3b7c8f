use diesel::prelude::*;

use crate::domain::destination::Destination;
use crate::domain::review::{NewReview, Review, ReviewStatus};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReviewListQuery, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(
        &self,
        query: ReviewListQuery,
    ) -> RepositoryResult<(usize, Vec<(Review, Destination)>)> {
        use crate::models::destination::Destination as DbDestination;
        use crate::models::review::Review as DbReview;
        use crate::schema::{destinations, reviews};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = reviews::table
                .inner_join(destinations::table)
                .into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(destination_id) = query.destination_id {
                items = items.filter(reviews::destination_id.eq(destination_id));
            }
            if let Some(status) = &query.status {
                items = items.filter(reviews::status.eq(status.to_string()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(reviews::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let combined = items
            .select((reviews::all_columns, destinations::all_columns))
            .load::<(DbReview, DbDestination)>(&mut conn)?
            .into_iter()
            .map(|(review, destination)| (review.into(), destination.into()))
            .collect();

        Ok((total, combined))
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review> {
        use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let insertable: DbNewReview = new_review.into();
        let review = diesel::insert_into(reviews::table)
            .values(&insertable)
            .get_result::<DbReview>(&mut conn)?;

        Ok(review.into())
    }

    fn set_review_status(&self, review_id: i32, status: ReviewStatus) -> RepositoryResult<Review> {
        use crate::models::review::Review as DbReview;
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let updated = diesel::update(reviews::table.find(review_id))
            .set(reviews::status.eq(status.to_string()))
            .get_result::<DbReview>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_review(&self, review_id: i32) -> RepositoryResult<()> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        diesel::delete(reviews::table.find(review_id)).execute(&mut conn)?;
        Ok(())
    }
}
