pub mod list_documents;
pub mod list_messages;
pub mod login;
pub mod search_documents;
pub mod send_chat_message;
pub mod signup;
pub mod upload_document;

#[cfg(test)]
pub(crate) mod test_support;

pub use list_documents::ListDocumentsUseCase;
pub use list_messages::ListMessagesUseCase;
pub use login::LoginUseCase;
pub use search_documents::SearchDocumentsUseCase;
pub use send_chat_message::SendChatMessageUseCase;
pub use signup::SignupUseCase;
pub use upload_document::UploadDocumentUseCase;
