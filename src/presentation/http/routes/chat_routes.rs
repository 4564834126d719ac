use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::ChatHandler;

pub fn chat_routes(chat_handler: Arc<ChatHandler>) -> Router {
    Router::new()
        .route("/api/chat", post(ChatHandler::send_message))
        .route("/api/messages/{user_id}", get(ChatHandler::list_messages))
        .with_state(chat_handler)
}
