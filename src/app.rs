use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api::create_api_router;
use crate::config::Config;
use crate::error::ServiceError;
use crate::models::ErrorResponse;
use crate::redirect::create_redirect_router;
use crate::resolver::Resolver;
use crate::short_id::{InvalidLength, ShortIdGenerator};
use crate::shortener::Shortener;
use crate::storage::MappingStore;

/// Both endpoints on one router, sharing one store handle.
pub fn create_app(store: Arc<dyn MappingStore>, config: &Config) -> Result<Router, InvalidLength> {
    let shortener = Arc::new(Shortener::new(
        Arc::clone(&store),
        ShortIdGenerator::try_from(config.short_id)?,
        config.base_url.clone(),
    ));
    let resolver = Arc::new(Resolver::new(store));

    let router = create_api_router(shortener)
        .merge(create_redirect_router(resolver))
        .fallback(unmatched_path)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Paths like `/fb37c0/` never name a stored id
async fn unmatched_path() -> ServiceError {
    ServiceError::NotFound
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
