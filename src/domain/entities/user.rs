use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: i32,
    email: String,
    name: Option<String>,
    password: String,
}

impl User {
    pub fn new(id: i32, email: String, name: Option<String>, password: String) -> Self {
        Self {
            id,
            email,
            name,
            password,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Passwords are stored verbatim, so this is an exact, case-sensitive
    /// string comparison.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// A user record that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    pub created_at: NaiveDateTime,
}

/// The public part of a user, echoed back by signup and login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}
