//! HTTP handlers for elective cycle endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, SchoolAppState};
use crate::application::handlers::academic::{
    CreateElectiveCycleCommand, DeleteElectiveCycleCommand, DisableElectiveCycleCommand,
    GetElectiveCycleQuery, ListElectiveCyclesQuery,
};
use crate::application::handlers::establishment::PropagateElectiveCycleCommand;
use crate::domain::foundation::ElectiveCycleId;

use super::dto::{
    CreateElectiveCycleRequest, DisableElectiveCycleResponse, ElectiveCycleResponse,
    ListElectiveCyclesParams, PropagationResponse,
};

fn parse_cycle_id(raw: &str) -> Result<ElectiveCycleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid elective cycle ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/elective-cycles - List cycles ordered by year
pub async fn list_elective_cycles(
    State(state): State<SchoolAppState>,
    Query(params): Query<ListElectiveCyclesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cycles = state
        .list_elective_cycles_handler()
        .handle(ListElectiveCyclesQuery {
            filter: params.filter(),
        })
        .await?;

    let body: Vec<ElectiveCycleResponse> = cycles.iter().map(ElectiveCycleResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/elective-cycles/:id - Fetch by UUID, or by year for a numeric segment
pub async fn get_elective_cycle(
    State(state): State<SchoolAppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = match key.parse::<i32>() {
        Ok(year) => GetElectiveCycleQuery::ByYear(year),
        Err(_) => GetElectiveCycleQuery::ById(parse_cycle_id(&key)?),
    };

    let cycle = state.get_elective_cycle_handler().handle(query).await?;
    Ok(Json(ElectiveCycleResponse::from(&cycle)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST / DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/elective-cycles - Create the cycle for a year
pub async fn create_elective_cycle(
    State(state): State<SchoolAppState>,
    Json(request): Json<CreateElectiveCycleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .create_elective_cycle_handler()
        .handle(CreateElectiveCycleCommand { year: request.year })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ElectiveCycleResponse::from(&result.cycle)),
    ))
}

/// POST /api/elective-cycles/:id/disable - Deactivate a cycle
pub async fn disable_elective_cycle(
    State(state): State<SchoolAppState>,
    Path(cycle_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&cycle_id)?;
    let result = state
        .disable_elective_cycle_handler()
        .handle(DisableElectiveCycleCommand { cycle_id })
        .await?;

    Ok(Json(DisableElectiveCycleResponse::from(result)))
}

/// DELETE /api/elective-cycles/:id - Delete a cycle no institution references
pub async fn delete_elective_cycle(
    State(state): State<SchoolAppState>,
    Path(cycle_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&cycle_id)?;
    state
        .delete_elective_cycle_handler()
        .handle(DeleteElectiveCycleCommand { cycle_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/elective-cycles/:id/propagate - Point every institution at the cycle
pub async fn propagate_elective_cycle(
    State(state): State<SchoolAppState>,
    Path(cycle_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&cycle_id)?;
    let report = state
        .propagate_elective_cycle_handler()
        .handle(PropagateElectiveCycleCommand { cycle_id })
        .await?;

    Ok(Json(PropagationResponse::from(&report)))
}
