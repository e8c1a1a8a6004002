//! Router assembly: routes, request ids, tracing and CORS.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

use crate::error::ServerError;
use crate::routes;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    routes::router()
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(middleware::from_fn(request_id))
        .layer(cors)
}

/// `*` allows any origin; anything else must be a single valid origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let origin = origin.trim();
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        let value =
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidCorsOrigin {
                value: origin.to_owned(),
            })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Reuses the caller's `x-request-id` or mints one, and echoes it back.
async fn request_id(mut request: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let id = match request.headers().get(&header) {
        Some(value) => value.clone(),
        None => {
            let minted = HeaderValue::from_str(&Uuid::new_v4().to_string());
            match minted {
                Ok(value) => {
                    request.headers_mut().insert(header.clone(), value.clone());
                    value
                }
                Err(_) => return next.run(request).await,
            }
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(header, id);
    response
}
