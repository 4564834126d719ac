pub mod sqlite_document_repository;
pub mod sqlite_message_repository;
pub mod sqlite_user_repository;

pub use sqlite_document_repository::SqliteDocumentRepository;
pub use sqlite_message_repository::SqliteMessageRepository;
pub use sqlite_user_repository::SqliteUserRepository;
