use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub user_id: i32,
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

impl NewChatMessage {
    /// Builds a message together with its canned reply.
    pub fn with_reply(user_id: i32, message: String, created_at: NaiveDateTime) -> Self {
        let response = synthesize_reply(&message);
        Self {
            user_id,
            message,
            response,
            created_at,
        }
    }
}

pub fn synthesize_reply(message: &str) -> String {
    format!("Response to: {}", message)
}
