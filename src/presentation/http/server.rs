use axum::{Router, middleware};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CorsOrigins};
use crate::infrastructure::container::AppContainer;
use crate::presentation::http::{
    auth::{AuthGate, require_bearer},
    handlers::{AuthHandler, ChatHandler, DocumentHandler, SearchHandler},
    routes::{auth_routes, chat_routes, document_routes, health_routes, search_routes},
};

pub struct HttpServer {
    auth_handler: Arc<AuthHandler>,
    chat_handler: Arc<ChatHandler>,
    document_handler: Arc<DocumentHandler>,
    search_handler: Arc<SearchHandler>,
    auth_gate: Arc<AuthGate>,
    cors_origins: CorsOrigins,
    max_body_bytes: usize,
    port: u16,
}

impl HttpServer {
    pub fn new(container: &AppContainer, config: &AppConfig) -> Self {
        Self {
            auth_handler: container.auth_handler.clone(),
            chat_handler: container.chat_handler.clone(),
            document_handler: container.document_handler.clone(),
            search_handler: container.search_handler.clone(),
            auth_gate: container.auth_gate.clone(),
            cors_origins: config.cors_origins.clone(),
            max_body_bytes: config.max_body_bytes,
            port: config.port,
        }
    }

    pub fn router(&self) -> Router {
        // Everything that reads or writes per-user data sits behind the gate.
        let data_routes = Router::new()
            .merge(chat_routes(self.chat_handler.clone()))
            .merge(document_routes(self.document_handler.clone()))
            .merge(search_routes(self.search_handler.clone()))
            .route_layer(middleware::from_fn_with_state(
                self.auth_gate.clone(),
                require_bearer,
            ));

        Router::new()
            .merge(health_routes())
            .merge(auth_routes(self.auth_handler.clone()))
            .merge(data_routes)
            .layer(cors_layer(&self.cors_origins))
            .layer(RequestBodyLimitLayer::new(self.max_body_bytes))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri().path()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        if self.auth_gate.is_enabled() {
            tracing::info!("Bearer tokens required on data routes");
        }
        tracing::info!("Server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
