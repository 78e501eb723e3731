use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::resolver::Resolver;

pub struct RedirectState {
    pub resolver: Arc<Resolver>,
}

/// Redirect to original URL
pub async fn redirect_url(
    State(state): State<Arc<RedirectState>>,
    Path(short_id): Path<String>,
) -> Result<Response, ServiceError> {
    let long_url = state.resolver.resolve(&short_id).await?;
    permanent_redirect(&long_url)
}

/// `GET /` carries no short id
pub async fn missing_short_id(
    State(state): State<Arc<RedirectState>>,
) -> Result<Response, ServiceError> {
    let long_url = state.resolver.resolve("").await?;
    permanent_redirect(&long_url)
}

/// 301 with the stored URL as `Location` and no body.
///
/// `Redirect::permanent` would answer 308.
fn permanent_redirect(long_url: &str) -> Result<Response, ServiceError> {
    let location = HeaderValue::from_bytes(long_url.as_bytes()).map_err(|e| {
        ServiceError::Unexpected(anyhow::anyhow!(
            "stored URL cannot be used as a Location header: {e}"
        ))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    #[derive(Serialize)]
    struct HealthResponse {
        status: String,
    }

    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
