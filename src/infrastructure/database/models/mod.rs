pub mod document_model;
pub mod message_model;
pub mod user_model;

pub use document_model::*;
pub use message_model::*;
pub use user_model::*;
