use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    /// Sanitized HTML body.
    pub body: String,
    pub image_url: Option<String>,
    pub author: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub author: String,
}

impl NewArticle {
    /// Trims the title and strips unsafe markup from the body.
    #[must_use]
    pub fn new(title: String, body: String, image_url: Option<String>, author: String) -> Self {
        Self {
            title: title.trim().to_string(),
            body: ammonia::clean(&body),
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            author,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateArticle {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl UpdateArticle {
    #[must_use]
    pub fn new(title: String, body: String, image_url: Option<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            body: ammonia::clean(&body),
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_strips_scripts() {
        let article = NewArticle::new(
            "  Pesona Sangihe  ".to_string(),
            "<p>aman</p><script>alert(1)</script>".to_string(),
            Some("  ".to_string()),
            "admin@example.com".to_string(),
        );
        assert_eq!(article.title, "Pesona Sangihe");
        assert_eq!(article.body, "<p>aman</p>");
        assert_eq!(article.image_url, None);
    }
}
