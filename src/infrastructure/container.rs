use std::sync::Arc;

use crate::{
    application::{
        services::TokenService,
        use_cases::{
            ListDocumentsUseCase, ListMessagesUseCase, LoginUseCase, SearchDocumentsUseCase,
            SendChatMessageUseCase, SignupUseCase, UploadDocumentUseCase,
        },
    },
    config::AppConfig,
    domain::repositories::{DocumentRepository, MessageRepository, UserRepository},
    infrastructure::database::{
        Database, DatabaseError,
        repositories::{SqliteDocumentRepository, SqliteMessageRepository, SqliteUserRepository},
    },
    presentation::http::{
        auth::AuthGate,
        handlers::{AuthHandler, ChatHandler, DocumentHandler, SearchHandler},
    },
};

pub struct AppContainer {
    // Application Services
    pub token_service: Arc<TokenService>,

    // HTTP Handlers
    pub auth_handler: Arc<AuthHandler>,
    pub chat_handler: Arc<ChatHandler>,
    pub document_handler: Arc<DocumentHandler>,
    pub search_handler: Arc<SearchHandler>,
    pub auth_gate: Arc<AuthGate>,
}

impl AppContainer {
    pub fn new(config: &AppConfig) -> Result<Self, DatabaseError> {
        let database = Database::new(config.database_url.clone());
        database.initialize()?;

        // Create repositories
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(database.clone()));
        let message_repository: Arc<dyn MessageRepository> =
            Arc::new(SqliteMessageRepository::new(database.clone()));
        let document_repository: Arc<dyn DocumentRepository> =
            Arc::new(SqliteDocumentRepository::new(database));

        if config.uses_default_secret() {
            tracing::warn!("JWT_SECRET is not set; tokens are signed with the built-in default");
        }
        let token_service = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl()));

        // Create use cases
        let signup_use_case = Arc::new(SignupUseCase::new(
            user_repository.clone(),
            token_service.clone(),
        ));
        let login_use_case = Arc::new(LoginUseCase::new(
            user_repository,
            token_service.clone(),
        ));
        let send_message_use_case =
            Arc::new(SendChatMessageUseCase::new(message_repository.clone()));
        let list_messages_use_case = Arc::new(ListMessagesUseCase::new(message_repository));
        let upload_document_use_case =
            Arc::new(UploadDocumentUseCase::new(document_repository.clone()));
        let list_documents_use_case =
            Arc::new(ListDocumentsUseCase::new(document_repository.clone()));
        let search_use_case = Arc::new(SearchDocumentsUseCase::new(document_repository));

        // Create HTTP handlers
        let auth_handler = Arc::new(AuthHandler::new(signup_use_case, login_use_case));
        let chat_handler = Arc::new(ChatHandler::new(
            send_message_use_case,
            list_messages_use_case,
        ));
        let document_handler = Arc::new(DocumentHandler::new(
            upload_document_use_case,
            list_documents_use_case,
        ));
        let search_handler = Arc::new(SearchHandler::new(search_use_case));
        let auth_gate = Arc::new(AuthGate::new(token_service.clone(), config.require_auth));

        Ok(Self {
            token_service,
            auth_handler,
            chat_handler,
            document_handler,
            search_handler,
            auth_gate,
        })
    }
}
