//! Browser UI
//!
//! `GET /` renders the empty form; `POST /` runs the flow once for the
//! submitted form and renders the full page. There is no session: every
//! request is a fresh render.

mod error;
mod handlers;
mod render;

pub use error::{ApiError, ApiResult};
pub use render::PageRenderer;

use crate::flow::ComparisonFlow;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state of the web UI
pub struct AppState {
    pub flow: ComparisonFlow,
    pub renderer: PageRenderer,
}

impl AppState {
    /// Build state around a flow
    pub fn new(flow: ComparisonFlow) -> crate::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            flow,
            renderer: PageRenderer::new()?,
        }))
    }
}

/// Build the router
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
