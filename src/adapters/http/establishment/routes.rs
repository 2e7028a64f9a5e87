//! Route configuration for institution endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_institution, list_institutions};
use crate::adapters::http::SchoolAppState;

/// Creates the institution router.
pub fn establishment_router() -> Router<SchoolAppState> {
    Router::new().route(
        "/api/institutions",
        get(list_institutions).post(create_institution),
    )
}
