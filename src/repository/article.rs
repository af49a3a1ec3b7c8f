use diesel::prelude::*;

use crate::domain::article::{Article, NewArticle, UpdateArticle};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ArticleListQuery, ArticleReader, ArticleWriter, DieselRepository};

impl ArticleReader for DieselRepository {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>> {
        use crate::models::article::Article as DbArticle;
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let article = articles::table
            .find(id)
            .first::<DbArticle>(&mut conn)
            .optional()?;

        Ok(article.map(Into::into))
    }

    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)> {
        use crate::models::article::Article as DbArticle;
        use crate::schema::articles;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = articles::table.into_boxed::<diesel::sqlite::Sqlite>();

            if query.published_only {
                items = items.filter(articles::published.eq(true));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(articles::title.like(pattern));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(articles::created_at.desc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let articles = items
            .load::<DbArticle>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, articles))
    }
}

impl ArticleWriter for DieselRepository {
    fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<Article> {
        use crate::models::article::{Article as DbArticle, NewArticle as DbNewArticle};
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let insertable: DbNewArticle = new_article.into();
        let article = diesel::insert_into(articles::table)
            .values(&insertable)
            .get_result::<DbArticle>(&mut conn)?;

        Ok(article.into())
    }

    fn update_article(
        &self,
        article_id: i32,
        updates: &UpdateArticle,
    ) -> RepositoryResult<Article> {
        use crate::models::article::{Article as DbArticle, UpdateArticle as DbUpdateArticle};
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateArticle = updates.into();
        let updated = diesel::update(articles::table.find(article_id))
            .set(&db_updates)
            .get_result::<DbArticle>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_article_published(
        &self,
        article_id: i32,
        published: bool,
    ) -> RepositoryResult<Article> {
        use crate::models::article::Article as DbArticle;
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let updated = diesel::update(articles::table.find(article_id))
            .set((
                articles::published.eq(published),
                articles::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbArticle>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_article(&self, article_id: i32) -> RepositoryResult<()> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        diesel::delete(articles::table.find(article_id)).execute(&mut conn)?;
        Ok(())
    }
}
