//! HTTP handlers for institution endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, SchoolAppState};
use crate::application::handlers::establishment::CreateInstitutionCommand;
use crate::domain::foundation::ElectiveCycleId;

use super::dto::{CreateInstitutionRequest, InstitutionResponse};

/// GET /api/institutions - List institutions ordered by name
pub async fn list_institutions(
    State(state): State<SchoolAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let institutions = state.list_institutions_handler().handle().await?;
    let body: Vec<InstitutionResponse> =
        institutions.iter().map(InstitutionResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/institutions - Register an institution
pub async fn create_institution(
    State(state): State<SchoolAppState>,
    Json(request): Json<CreateInstitutionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let elective_cycle_id: ElectiveCycleId = request
        .elective_cycle_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid elective cycle ID format".to_string()))?;

    let institution = state
        .create_institution_handler()
        .handle(CreateInstitutionCommand {
            name: request.name,
            opening_hour: request.opening_hour,
            closing_hour: request.closing_hour,
            elective_cycle_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InstitutionResponse::from(&institution))))
}
