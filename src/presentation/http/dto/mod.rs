pub mod auth_dto;
pub mod chat_dto;
pub mod document_dto;
pub mod response_dto;
pub mod search_dto;

pub use auth_dto::*;
pub use chat_dto::*;
pub use document_dto::*;
pub use response_dto::*;
pub use search_dto::*;
