use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::entities::{NewUser, User};
use crate::infrastructure::database::schema::users;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserModel {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserModel {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    pub created_at: NaiveDateTime,
}

impl From<NewUser> for NewUserModel {
    fn from(user: NewUser) -> Self {
        Self {
            email: user.email,
            name: user.name,
            password: user.password,
            created_at: user.created_at,
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::new(model.id, model.email, model.name, model.password)
    }
}
