//! HTTP request handlers and shared application state.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use string_analyzer_rs::models::StringRecord;
use string_store_rs::filter::StructuredQuery;
use string_store_rs::StringManager;
use tokio::sync::RwLock;

use crate::api::errors::ApiError;
use crate::api::models::*;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<RwLock<StringManager>>,
}

impl AppState {
    pub fn new(manager: StringManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
        }
    }
}

/// `GET /`
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "string-analyzer".to_string(),
    })
}

/// `POST /strings`
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<CreateStringRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StringRecord>), ApiError> {
    let Json(req) = payload?;
    let record = state.manager.write().await.create_async(&req.value).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings/:value`
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>, ApiError> {
    let manager = state.manager.read().await;
    let record = manager.get(&value)?;
    Ok(Json(record.clone()))
}

/// `DELETE /strings/:value`
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.manager.write().await.delete_async(&value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /strings` with optional structured filters.
pub async fn list_strings(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    params: Result<Query<StructuredQuery>, QueryRejection>,
) -> Result<Json<StringListResponse>, ApiError> {
    let Query(params) = params?;
    let filters = params
        .into_filter_set(raw.unwrap_or_default())
        .map_err(ApiError::from_structured_filter)?;

    let manager = state.manager.read().await;
    let data = manager.list(&filters).into_iter().cloned().collect();
    Ok(Json(StringListResponse::new(filters.filters(), data)))
}

/// `GET /strings/filter-by-natural-language?query=...`
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(params) = params?;
    let query = params
        .query
        .ok_or_else(|| ApiError::BadRequest("missing required query parameter 'query'".into()))?;

    let manager = state.manager.read().await;
    let result = manager.filter_natural_language(&query)?;
    let data = result.records.into_iter().cloned().collect();
    Ok(Json(NaturalLanguageResponse::new(result.interpreted, data)))
}
