pub mod auth_handler;
pub mod chat_handler;
pub mod document_handler;
pub mod search_handler;

pub use auth_handler::AuthHandler;
pub use chat_handler::ChatHandler;
pub use document_handler::DocumentHandler;
pub use search_handler::SearchHandler;
