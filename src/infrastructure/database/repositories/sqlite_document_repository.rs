use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};

use crate::domain::entities::{DocumentMatch, DocumentSummary, NewDocument};
use crate::domain::repositories::{DocumentRepository, RepositoryError};
use crate::infrastructure::database::Database;
use crate::infrastructure::database::models::{
    DocumentMatchModel, DocumentSummaryModel, NewDocumentModel,
};
use crate::infrastructure::database::schema::documents;

// SQLite's LIKE ignores ASCII case and treats % and _ as wildcards; instr
// is an exact, case-sensitive substring test.
diesel::define_sql_function!(fn instr(haystack: Text, needle: Text) -> Integer);

pub struct SqliteDocumentRepository {
    database: Database,
}

impl SqliteDocumentRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl DocumentRepository for SqliteDocumentRepository {
    async fn save(&self, document: NewDocument) -> Result<(), RepositoryError> {
        let new_document = NewDocumentModel::from(document);

        self.database
            .run(move |conn| {
                diesel::insert_into(documents::table)
                    .values(new_document)
                    .execute(conn)
                    .map(|_| ())
            })
            .await
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<DocumentSummary>, RepositoryError> {
        let models = self
            .database
            .run(move |conn| {
                documents::table
                    .filter(documents::user_id.eq(user_id))
                    .order(documents::id.asc())
                    .select(DocumentSummaryModel::as_select())
                    .load(conn)
            })
            .await?;

        Ok(models.into_iter().map(DocumentSummary::from).collect())
    }

    async fn search(
        &self,
        user_id: i32,
        query: &str,
    ) -> Result<Vec<DocumentMatch>, RepositoryError> {
        let query = query.to_string();

        let models = self
            .database
            .run(move |conn| {
                documents::table
                    .filter(documents::user_id.eq(user_id))
                    .filter(instr(documents::content, query).gt(0))
                    .order(documents::id.asc())
                    .select(DocumentMatchModel::as_select())
                    .load(conn)
            })
            .await?;

        Ok(models.into_iter().map(DocumentMatch::from).collect())
    }
}
