//! Route configuration for elective cycle endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_elective_cycle, delete_elective_cycle, disable_elective_cycle, get_elective_cycle,
    list_elective_cycles, propagate_elective_cycle,
};
use crate::adapters::http::SchoolAppState;

/// Creates the elective cycle router.
pub fn academic_router() -> Router<SchoolAppState> {
    Router::new()
        .route(
            "/api/elective-cycles",
            get(list_elective_cycles).post(create_elective_cycle),
        )
        .route(
            "/api/elective-cycles/:id",
            get(get_elective_cycle).delete(delete_elective_cycle),
        )
        .route("/api/elective-cycles/:id/disable", post(disable_elective_cycle))
        .route("/api/elective-cycles/:id/propagate", post(propagate_elective_cycle))
}
