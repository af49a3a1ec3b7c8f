use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: f64,
    /// Entrance price; `None` and `0` both mean free entry.
    pub price: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Destination {
    pub fn is_free(&self) -> bool {
        self.price.unwrap_or(0) == 0
    }
}

/// Predefined activity offered by a destination, used to pre-fill the
/// wizard's add-activity form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DestinationActivity {
    pub id: i32,
    pub destination_id: i32,
    pub label: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDestination {
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub price: Option<i32>,
}

impl NewDestination {
    #[must_use]
    pub fn new(
        name: String,
        location: String,
        category: String,
        description: String,
        image_url: Option<String>,
        rating: f64,
        price: Option<i32>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            category: category.trim().to_lowercase(),
            description,
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            rating: rating.clamp(0.0, 5.0),
            price: price.filter(|p| *p > 0),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDestination {
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub price: Option<i32>,
}

impl UpdateDestination {
    #[must_use]
    pub fn new(
        name: String,
        location: String,
        category: String,
        description: String,
        image_url: Option<String>,
        rating: f64,
        price: Option<i32>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            category: category.trim().to_lowercase(),
            description,
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            rating: rating.clamp(0.0, 5.0),
            price: price.filter(|p| *p > 0),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDestinationActivity {
    pub label: String,
    pub start_time: String,
    pub end_time: String,
}
