pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{Database, DatabaseError};

#[cfg(test)]
pub(crate) use connection::temp_database;
