pub mod document_repository;
pub mod message_repository;
pub mod user_repository;

pub use document_repository::DocumentRepository;
pub use message_repository::MessageRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Storage failures as seen by the application layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("Database error: {0}")]
    Database(String),
}
