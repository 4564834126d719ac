pub mod container;
pub mod database;

// Re-export commonly used items
pub use container::AppContainer;
pub use database::Database;
