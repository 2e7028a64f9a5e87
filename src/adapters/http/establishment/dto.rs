//! HTTP DTOs for institution endpoints.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::establishment::Institution;

/// Request to create an institution.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstitutionRequest {
    pub name: String,
    /// `HH:MM:SS`
    pub opening_hour: NaiveTime,
    /// `HH:MM:SS`
    pub closing_hour: NaiveTime,
    pub elective_cycle_id: String,
}

/// Institution details.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionResponse {
    pub id: String,
    pub name: String,
    pub opening_hour: NaiveTime,
    pub closing_hour: NaiveTime,
    pub is_active: bool,
    pub elective_cycle_id: String,
}

impl From<&Institution> for InstitutionResponse {
    fn from(institution: &Institution) -> Self {
        Self {
            id: institution.id().to_string(),
            name: institution.name().to_string(),
            opening_hour: institution.opening_hour(),
            closing_hour: institution.closing_hour(),
            is_active: institution.is_active(),
            elective_cycle_id: institution.elective_cycle_id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_clock_times() {
        let json = r#"{
            "name": "Liceo Norte",
            "opening_hour": "07:30:00",
            "closing_hour": "16:00:00",
            "elective_cycle_id": "00000000-0000-0000-0000-000000000000"
        }"#;
        let req: CreateInstitutionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.opening_hour, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(req.closing_hour, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }
}
