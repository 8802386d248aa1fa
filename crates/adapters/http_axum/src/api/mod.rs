//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;
#[allow(clippy::missing_errors_doc)]
pub mod report;

use axum::Router;
use axum::routing::{delete, get};

use pantry_app::ports::{Clock, KeyValueStore, ReportSink};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, C, R>() -> Router<AppState<S, C, R>>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    Router::new()
        // Items
        .route(
            "/items",
            get(items::list::<S, C, R>).post(items::create::<S, C, R>),
        )
        .route("/items/expiry", get(items::expiry::<S, C, R>))
        .route("/items/{id}", delete(items::delete::<S, C, R>))
        // Report
        .route(
            "/report",
            get(report::render::<S, C, R>).post(report::export::<S, C, R>),
        )
}
