//! Todo Web
//!
//! Layered architecture:
//! - todo_core: items and the in-memory store
//! - handlers: axum handlers for the page, form posts and static files
//! - view: server-rendered HTML

use std::path::PathBuf;
use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use todo_core::ItemRepository;

pub mod config;
pub mod handlers;
mod middleware;
pub mod view;

pub use config::{Args, ServerConfig};
pub use view::Viewer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub items: ItemRepository,
    pub viewer: Arc<Viewer>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Fresh, empty store for a newly started server
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_repository(
            ItemRepository::in_memory(),
            config.viewer.clone(),
            config.static_dir.clone(),
        )
    }

    pub fn with_repository(items: ItemRepository, viewer: Viewer, static_dir: PathBuf) -> Self {
        Self {
            items,
            viewer: Arc::new(viewer),
            static_dir: Arc::new(static_dir),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/add", post(handlers::add_item_handler))
        .route("/toggle", post(handlers::toggle_item_handler))
        .route("/api/items", get(handlers::list_items_handler))
        .route("/static/*path", get(handlers::static_asset_handler))
        .layer(from_fn(middleware::request_logging_middleware))
        .with_state(state)
}
