//! Forms posted by the admin back-office.

use serde::Deserialize;
use validator::Validate;

use crate::domain::alert::{AlertLevel, NewAlert};
use crate::domain::article::{NewArticle, UpdateArticle};
use crate::domain::destination::{
    NewDestination, NewDestinationActivity, UpdateDestination,
};
use crate::forms::validate_time_hhmm;

#[derive(Deserialize, Validate)]
pub struct SaveDestinationForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub price: Option<i32>,
    /// Suggested activities, one per line as `label|HH:MM|HH:MM`.
    #[serde(default)]
    pub activities: String,
}

impl SaveDestinationForm {
    /// Parses the activities textarea; malformed lines fail the whole
    /// form so the admin can fix them instead of losing rows silently.
    pub fn parse_activities(&self) -> Result<Vec<NewDestinationActivity>, String> {
        let mut parsed = Vec::new();
        for line in self.activities.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(3, '|').map(str::trim);
            let (Some(label), Some(start), Some(end)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(format!("Baris aktivitas tidak valid: {line}"));
            };
            if label.is_empty()
                || validate_time_hhmm(start).is_err()
                || validate_time_hhmm(end).is_err()
            {
                return Err(format!("Baris aktivitas tidak valid: {line}"));
            }
            parsed.push(NewDestinationActivity {
                label: label.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
            });
        }
        Ok(parsed)
    }
}

impl From<&SaveDestinationForm> for NewDestination {
    fn from(form: &SaveDestinationForm) -> Self {
        NewDestination::new(
            form.name.clone(),
            form.location.clone(),
            form.category.clone(),
            form.description.clone(),
            form.image_url.clone(),
            form.rating,
            form.price,
        )
    }
}

impl From<&SaveDestinationForm> for UpdateDestination {
    fn from(form: &SaveDestinationForm) -> Self {
        UpdateDestination::new(
            form.name.clone(),
            form.location.clone(),
            form.category.clone(),
            form.description.clone(),
            form.image_url.clone(),
            form.rating,
            form.price,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveArticleForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub image_url: Option<String>,
}

impl SaveArticleForm {
    pub fn to_new_article(&self, author: &str) -> NewArticle {
        NewArticle::new(
            self.title.clone(),
            self.body.clone(),
            self.image_url.clone(),
            author.to_string(),
        )
    }

    pub fn to_update_article(&self) -> UpdateArticle {
        UpdateArticle::new(self.title.clone(), self.body.clone(), self.image_url.clone())
    }
}

#[derive(Deserialize, Validate)]
pub struct CreateAlertForm {
    #[validate(length(min = 1))]
    pub message: String,
    pub level: String,
}

impl From<&CreateAlertForm> for NewAlert {
    fn from(form: &CreateAlertForm) -> Self {
        NewAlert {
            message: form.message.trim().to_string(),
            level: AlertLevel::from(form.level.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination_form(activities: &str) -> SaveDestinationForm {
        SaveDestinationForm {
            name: "Pantai Mahoro".to_string(),
            location: "Pulau Mahoro".to_string(),
            category: "Pantai".to_string(),
            description: String::new(),
            image_url: None,
            rating: 4.5,
            price: None,
            activities: activities.to_string(),
        }
    }

    #[test]
    fn parses_activity_lines() {
        let form = destination_form("Snorkeling|09:00|11:00\n\n Island hopping | 13:00 | 16:00 ");
        let activities = form.parse_activities().unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[1].label, "Island hopping");
        assert_eq!(activities[1].start_time, "13:00");
    }

    #[test]
    fn rejects_malformed_activity_line() {
        let form = destination_form("Snorkeling|9am|11:00");
        assert!(form.parse_activities().is_err());
    }
}
