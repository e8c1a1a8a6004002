//! Favorites endpoints. Mutations always answer 200 with their outcome.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dexgate_core::{AddFavoriteOutcome, FavoriteOutcome};
use serde::{Deserialize, Serialize};

use super::Caller;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FavoritesParams {
    pub include: Option<String>,
}

impl FavoritesParams {
    fn wants_creatures(&self) -> bool {
        self.include
            .as_deref()
            .is_some_and(|include| include.split(',').any(|part| part.trim() == "creature"))
    }
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: u32,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(list_favorites).post(add_favorite).delete(clear_favorites),
        )
        .route("/favorites/count", get(count_favorites))
        .route(
            "/favorites/:id",
            get(is_favorite).delete(remove_favorite),
        )
}

async fn list_favorites(
    State(state): State<AppState>,
    Caller(caller): Caller,
    params: Result<Query<FavoritesParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    if params.wants_creatures() {
        let resolved = state.gateway.favorites_with_creatures(&caller).await?;
        return Ok(Json(resolved).into_response());
    }

    Ok(Json(state.gateway.get_favorites(&caller)).into_response())
}

async fn count_favorites(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.gateway.favorite_count(&caller),
    })
}

async fn is_favorite(
    State(state): State<AppState>,
    Caller(caller): Caller,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let Path(id) = id?;
    Ok(Json(MembershipResponse {
        id,
        is_favorite: state.gateway.is_favorite(&caller, id),
    }))
}

async fn add_favorite(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<Json<AddFavoriteOutcome>, ApiError> {
    let Json(request) = body?;
    Ok(Json(
        state
            .gateway
            .add_favorite(&caller, request.id, &request.name)
            .await,
    ))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Caller(caller): Caller,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<FavoriteOutcome>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.gateway.remove_favorite(&caller, id)))
}

async fn clear_favorites(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Json<FavoriteOutcome> {
    Json(state.gateway.clear_favorites(&caller))
}
