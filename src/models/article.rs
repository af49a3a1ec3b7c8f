use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::article::{
    Article as DomainArticle, NewArticle as DomainNewArticle, UpdateArticle as DomainUpdateArticle,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::articles)]
/// Diesel model for [`crate::domain::article::Article`].
pub struct Article {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub author: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::articles)]
pub struct NewArticle<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image_url: Option<&'a str>,
    pub author: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
pub struct UpdateArticle<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Article> for DomainArticle {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            body: article.body,
            image_url: article.image_url,
            author: article.author,
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewArticle> for NewArticle<'a> {
    fn from(article: &'a DomainNewArticle) -> Self {
        Self {
            title: article.title.as_str(),
            body: article.body.as_str(),
            image_url: article.image_url.as_deref(),
            author: article.author.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateArticle> for UpdateArticle<'a> {
    fn from(article: &'a DomainUpdateArticle) -> Self {
        Self {
            title: article.title.as_str(),
            body: article.body.as_str(),
            image_url: article.image_url.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
