use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{ListMessagesUseCase, SendChatMessageUseCase};
use crate::presentation::http::auth::Caller;
use crate::presentation::http::dto::{
    ChatRequestDto, ChatResponseDto, MessageDto, MessageListResponseDto,
};
use crate::presentation::http::errors::ApiError;

pub struct ChatHandler {
    send_message_use_case: Arc<SendChatMessageUseCase>,
    list_messages_use_case: Arc<ListMessagesUseCase>,
}

impl ChatHandler {
    pub fn new(
        send_message_use_case: Arc<SendChatMessageUseCase>,
        list_messages_use_case: Arc<ListMessagesUseCase>,
    ) -> Self {
        Self {
            send_message_use_case,
            list_messages_use_case,
        }
    }

    pub async fn send_message(
        State(handler): State<Arc<ChatHandler>>,
        caller: Caller,
        Json(request): Json<ChatRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        caller.authorize(request.user_id)?;

        let reply = handler.send_message_use_case.execute(request.into()).await?;
        Ok((StatusCode::OK, Json(ChatResponseDto::from(reply))))
    }

    pub async fn list_messages(
        State(handler): State<Arc<ChatHandler>>,
        caller: Caller,
        Path(user_id): Path<i32>,
    ) -> Result<impl IntoResponse, ApiError> {
        caller.authorize(user_id)?;

        let messages = handler.list_messages_use_case.execute(user_id).await?;
        let dto = MessageListResponseDto {
            messages: messages.into_iter().map(MessageDto::from).collect(),
        };
        Ok((StatusCode::OK, Json(dto)))
    }
}
