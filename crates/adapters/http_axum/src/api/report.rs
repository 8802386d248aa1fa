//! Report handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pantry_app::ports::{Clock, KeyValueStore, ReportSink};

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned once a report has been exported.
#[derive(Serialize)]
pub struct ExportBody {
    pub location: String,
}

/// Possible responses from the render endpoint.
pub enum RenderResponse {
    /// Plain-text report.
    Ok(String),
}

impl IntoResponse for RenderResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => text.into_response(),
        }
    }
}

/// Possible responses from the export endpoint.
pub enum ExportResponse {
    Ok(Json<ExportBody>),
}

impl IntoResponse for ExportResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/report`
pub async fn render<S, C, R>(State(state): State<AppState<S, C, R>>) -> RenderResponse
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    RenderResponse::Ok(state.inventory_service.build_report().await)
}

/// `POST /api/report`
pub async fn export<S, C, R>(
    State(state): State<AppState<S, C, R>>,
) -> Result<ExportResponse, ApiError>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    let location = state.inventory_service.export_report().await?;
    Ok(ExportResponse::Ok(Json(ExportBody { location })))
}
