pub mod chat_message;
pub mod document;
pub mod user;

pub use chat_message::{ChatMessage, NewChatMessage};
pub use document::{DocumentMatch, DocumentSummary, NewDocument};
pub use user::{NewUser, User, UserProfile};
