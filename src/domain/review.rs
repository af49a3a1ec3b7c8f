use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i32,
    pub destination_id: i32,
    pub author_email: String,
    /// 1 to 5 stars.
    pub rating: i32,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: NaiveDateTime,
}

/// Moderation state of a review. New reviews start out pending and only
/// approved ones are shown on public pages.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ReviewStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => ReviewStatus::Approved,
            "rejected" => ReviewStatus::Rejected,
            _ => ReviewStatus::Pending,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub destination_id: i32,
    pub author_email: String,
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    #[must_use]
    pub fn new(destination_id: i32, author_email: String, rating: i32, comment: String) -> Self {
        Self {
            destination_id,
            author_email: author_email.trim().to_lowercase(),
            rating: rating.clamp(1, 5),
            comment: comment.trim().to_string(),
        }
    }
}
