use chrono::NaiveDateTime;

/// Maximum number of characters returned from a matching document.
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: i32,
    pub filename: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Listing view of a document. Content is never loaded for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub id: i32,
    pub filename: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMatch {
    pub filename: String,
    pub content: String,
}

impl DocumentMatch {
    /// First `EXCERPT_CHARS` characters of the content. Counts chars, not
    /// bytes, so multi-byte text is never split mid code point.
    pub fn excerpt(&self) -> String {
        match self.content.char_indices().nth(EXCERPT_CHARS) {
            Some((cut, _)) => self.content[..cut].to_string(),
            None => self.content.clone(),
        }
    }
}
