use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::entities::{DocumentMatch, DocumentSummary, NewDocument};
use crate::infrastructure::database::schema::documents;

/// Listing projection; `content` is deliberately not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentSummaryModel {
    pub id: i32,
    pub filename: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentMatchModel {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocumentModel {
    pub user_id: i32,
    pub filename: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<NewDocument> for NewDocumentModel {
    fn from(document: NewDocument) -> Self {
        Self {
            user_id: document.user_id,
            filename: document.filename,
            content: document.content,
            created_at: document.created_at,
        }
    }
}

impl From<DocumentSummaryModel> for DocumentSummary {
    fn from(model: DocumentSummaryModel) -> Self {
        Self {
            id: model.id,
            filename: model.filename,
            created_at: model.created_at,
        }
    }
}

impl From<DocumentMatchModel> for DocumentMatch {
    fn from(model: DocumentMatchModel) -> Self {
        Self {
            filename: model.filename,
            content: model.content,
        }
    }
}
