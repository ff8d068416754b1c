//! Web layer - router and server-rendered pages

pub mod health;
pub mod pages;
pub mod renderer;
pub mod state;

use axum::Router;
use axum::routing::get;

pub use renderer::PageRenderer;
pub use state::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
