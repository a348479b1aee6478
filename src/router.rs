use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::trace::TraceLayer;

use crate::ApiError;
use crate::config::{Config, ConfigError};
use crate::db::{self, TodoStorage};
use crate::handlers::{docs, health, todos};

/// Shared handler state.
///
/// Holds the storage or the reason it could not be configured; routes that
/// need the database surface that reason as a 5xx.
#[derive(Clone)]
pub struct AppState {
    storage: Result<TodoStorage, ConfigError>,
}

impl AppState {
    pub fn new(storage: Result<TodoStorage, ConfigError>) -> Self {
        Self { storage }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(db::connect_lazy(cfg))
    }

    pub fn storage(&self) -> Result<&TodoStorage, ApiError> {
        self.storage
            .as_ref()
            .map_err(|e| ApiError::Config(e.clone()))
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(todos::root))
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            patch(todos::toggle_done).delete(todos::delete_todo),
        )
        .route(docs::OPENAPI_PATH, get(docs::openapi_json))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
