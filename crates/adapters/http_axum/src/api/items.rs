//! JSON REST handlers for items.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pantry_app::ports::{Clock, KeyValueStore, ReportSink};
use pantry_app::report::ItemExpiry;
use pantry_domain::id::ItemId;
use pantry_domain::item::{Item, ItemInput};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the expiry overview endpoint.
pub enum ExpiryResponse {
    Ok(Json<Vec<ItemExpiry>>),
}

impl IntoResponse for ExpiryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/items`
pub async fn list<S, C, R>(State(state): State<AppState<S, C, R>>) -> ListResponse
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    let items = state.inventory_service.list_items().await;
    ListResponse::Ok(Json(items))
}

/// `GET /api/items/expiry`
pub async fn expiry<S, C, R>(State(state): State<AppState<S, C, R>>) -> ExpiryResponse
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    let overview = state.inventory_service.expiry_overview().await;
    ExpiryResponse::Ok(Json(overview))
}

/// `POST /api/items`
pub async fn create<S, C, R>(
    State(state): State<AppState<S, C, R>>,
    Json(input): Json<ItemInput>,
) -> Result<CreateResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    let item = state.inventory_service.add_item(input).await?;
    Ok(CreateResponse::Created(Json(item)))
}

/// `DELETE /api/items/:id`
pub async fn delete<S, C, R>(
    State(state): State<AppState<S, C, R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    state.inventory_service.delete_item(&ItemId::from(id)).await?;
    Ok(DeleteResponse::NoContent)
}
