use diesel::prelude::*;

use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserListQuery, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = users::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    users::email
                        .like(pattern.clone())
                        .or(users::name.like(pattern)),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(users::email.asc());
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let users = items
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, users))
    }
}

impl UserWriter for DieselRepository {
    fn create_or_update_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;

        let existing = users::table
            .filter(users::email.eq(&new_user.email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        let user = match existing {
            Some(user) => diesel::update(users::table.find(user.id))
                .set((
                    users::name.eq(&new_user.name),
                    users::roles.eq(new_user.roles.join(",")),
                ))
                .get_result::<DbUser>(&mut conn)?,
            None => {
                let insertable: DbNewUser = new_user.into();
                diesel::insert_into(users::table)
                    .values(&insertable)
                    .get_result::<DbUser>(&mut conn)?
            }
        };

        Ok(user.into())
    }

    fn delete_user(&self, user_id: i32) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        diesel::delete(users::table.find(user_id)).execute(&mut conn)?;
        Ok(())
    }
}
