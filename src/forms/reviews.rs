use serde::Deserialize;
use validator::Validate;

use crate::domain::review::NewReview;

#[derive(Deserialize, Validate)]
pub struct AddReviewForm {
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(min = 1))]
    pub comment: String,
}

impl AddReviewForm {
    pub fn to_new_review(&self, destination_id: i32, author_email: &str) -> NewReview {
        NewReview::new(
            destination_id,
            author_email.to_string(),
            self.rating,
            self.comment.clone(),
        )
    }
}
