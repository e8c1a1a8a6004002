//! HTTP routes.
//!
//! | Method & path | Handler |
//! |---------------|---------|
//! | `GET /` | service info |
//! | `GET /health` | liveness and uptime |
//! | `GET /creatures` | paged catalogue |
//! | `GET /creatures/search` | name substring search |
//! | `GET /creatures/:identifier` | creature detail |
//! | `GET /favorites` | caller's favorites |
//! | `GET /favorites/count` | caller's favorite count |
//! | `GET /favorites/:id` | membership check |
//! | `POST /favorites` | add favorite |
//! | `DELETE /favorites/:id` | remove favorite |
//! | `DELETE /favorites` | clear favorites |

pub mod creatures;
pub mod favorites;
pub mod health;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::Router;
use dexgate_core::CallerId;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller's identity token.
pub const CALLER_HEADER: &str = "x-user-id";

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(creatures::routes())
        .merge(favorites::routes())
}

/// Caller identity taken from [`CALLER_HEADER`].
///
/// The token is opaque: any UTF-8 value names its own collection. Only an
/// absent or blank header selects the shared default caller. Non-UTF-8
/// bytes are rejected.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerId);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(CALLER_HEADER) {
            Some(value) => Some(
                std::str::from_utf8(value.as_bytes()).map_err(|_| ApiError::InvalidCaller)?,
            ),
            None => None,
        };
        Ok(Self(CallerId::from_token(token)))
    }
}
