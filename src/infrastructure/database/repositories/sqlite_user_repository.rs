use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::database::Database;
use crate::infrastructure::database::models::{NewUserModel, UserModel};
use crate::infrastructure::database::schema::users;

pub struct SqliteUserRepository {
    database: Database,
}

impl SqliteUserRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<i32, RepositoryError> {
        let email = user.email.clone();
        let new_user = NewUserModel::from(user);

        // Insert and id lookup share one connection.
        self.database
            .run(move |conn| {
                diesel::insert_into(users::table)
                    .values(new_user)
                    .execute(conn)?;

                users::table
                    .filter(users::email.eq(email))
                    .select(users::id)
                    .first::<i32>(conn)
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.to_string();

        let model = self
            .database
            .run(move |conn| {
                users::table
                    .filter(users::email.eq(email))
                    .select(UserModel::as_select())
                    .first(conn)
                    .optional()
            })
            .await?;

        Ok(model.map(User::from))
    }
}
