use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::destination::{
    Destination as DomainDestination, DestinationActivity as DomainDestinationActivity,
    NewDestination as DomainNewDestination, NewDestinationActivity as DomainNewDestinationActivity,
    UpdateDestination as DomainUpdateDestination,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::destinations)]
/// Diesel model for [`crate::domain::destination::Destination`].
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub price: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestination<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub rating: f64,
    pub price: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::destinations, treat_none_as_null = true)]
pub struct UpdateDestination<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub rating: f64,
    pub price: Option<i32>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Destination, foreign_key = destination_id))]
#[diesel(table_name = crate::schema::destination_activities)]
pub struct DestinationActivity {
    pub id: i32,
    pub destination_id: i32,
    pub label: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destination_activities)]
pub struct NewDestinationActivity<'a> {
    pub destination_id: i32,
    pub label: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
}

impl From<Destination> for DomainDestination {
    fn from(destination: Destination) -> Self {
        Self {
            id: destination.id,
            name: destination.name,
            location: destination.location,
            category: destination.category,
            description: destination.description,
            image_url: destination.image_url,
            rating: destination.rating,
            price: destination.price,
            created_at: destination.created_at,
            updated_at: destination.updated_at,
        }
    }
}

impl From<DestinationActivity> for DomainDestinationActivity {
    fn from(activity: DestinationActivity) -> Self {
        Self {
            id: activity.id,
            destination_id: activity.destination_id,
            label: activity.label,
            start_time: activity.start_time,
            end_time: activity.end_time,
        }
    }
}

impl<'a> From<&'a DomainNewDestination> for NewDestination<'a> {
    fn from(destination: &'a DomainNewDestination) -> Self {
        Self {
            name: destination.name.as_str(),
            location: destination.location.as_str(),
            category: destination.category.as_str(),
            description: destination.description.as_str(),
            image_url: destination.image_url.as_deref(),
            rating: destination.rating,
            price: destination.price,
        }
    }
}

impl<'a> From<&'a DomainUpdateDestination> for UpdateDestination<'a> {
    fn from(destination: &'a DomainUpdateDestination) -> Self {
        Self {
            name: destination.name.as_str(),
            location: destination.location.as_str(),
            category: destination.category.as_str(),
            description: destination.description.as_str(),
            image_url: destination.image_url.as_deref(),
            rating: destination.rating,
            price: destination.price,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl<'a> NewDestinationActivity<'a> {
    pub fn from_domain(destination_id: i32, activity: &'a DomainNewDestinationActivity) -> Self {
        Self {
            destination_id,
            label: activity.label.as_str(),
            start_time: activity.start_time.as_str(),
            end_time: activity.end_time.as_str(),
        }
    }
}
