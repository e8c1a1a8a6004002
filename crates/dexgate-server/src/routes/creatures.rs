//! Catalogue read endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use dexgate_core::{Creature, CreatureList, CreatureListItem, PageRequest};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/creatures", get(list_creatures))
        .route("/creatures/search", get(search_creatures))
        .route("/creatures/:identifier", get(get_creature))
}

async fn list_creatures(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<CreatureList>, ApiError> {
    let Query(params) = params?;
    let page = PageRequest::from_options(params.limit, params.offset);
    Ok(Json(state.gateway.list_creatures(page).await?))
}

async fn search_creatures(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<CreatureListItem>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.gateway.search_creatures(&params.query).await?))
}

async fn get_creature(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Creature>, ApiError> {
    Ok(Json(state.gateway.get_creature(&identifier).await?))
}
