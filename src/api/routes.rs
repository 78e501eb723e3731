use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::shortener::Shortener;

use super::handlers::{shorten_preflight, shorten_url, ApiState};

pub fn create_api_router(shortener: Arc<Shortener>) -> Router {
    let state = Arc::new(ApiState { shortener });

    // Long URLs are accepted at any size; the upstream gateway bounds requests
    Router::new()
        .route(
            "/shorten",
            post(shorten_url)
                .options(shorten_preflight)
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}
