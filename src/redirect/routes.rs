use axum::{routing::get, Router};
use std::sync::Arc;

use crate::resolver::Resolver;

use super::handlers::{health_check, missing_short_id, redirect_url, RedirectState};

pub fn create_redirect_router(resolver: Arc<Resolver>) -> Router {
    let state = Arc::new(RedirectState { resolver });

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(missing_short_id))
        .route("/{short_id}", get(redirect_url))
        .with_state(state)
}
