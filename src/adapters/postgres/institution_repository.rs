//! PostgreSQL implementation of InstitutionRepository.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::violation;
use crate::domain::establishment::Institution;
use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode, InstitutionId};
use crate::ports::InstitutionRepository;

/// PostgreSQL implementation of InstitutionRepository.
#[derive(Clone)]
pub struct PostgresInstitutionRepository {
    pool: PgPool,
}

impl PostgresInstitutionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A write that trips the `elective_cycle_id` foreign key names a missing cycle.
fn cycle_reference_error(
    cycle_id: &ElectiveCycleId,
    kind: Option<ErrorKind>,
    context: &str,
    err: impl fmt::Display,
) -> DomainError {
    match kind {
        Some(ErrorKind::ForeignKeyViolation) => DomainError::new(
            ErrorCode::ElectiveCycleNotFound,
            format!("Elective cycle not found: {}", cycle_id),
        ),
        _ => DomainError::database(context, err),
    }
}

#[async_trait]
impl InstitutionRepository for PostgresInstitutionRepository {
    async fn save(&self, institution: &Institution) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO institutions (
                id, name, opening_hour, closing_hour, is_active, elective_cycle_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                opening_hour = EXCLUDED.opening_hour,
                closing_hour = EXCLUDED.closing_hour,
                is_active = EXCLUDED.is_active,
                elective_cycle_id = EXCLUDED.elective_cycle_id
            "#,
        )
        .bind(institution.id().as_uuid())
        .bind(institution.name())
        .bind(institution.opening_hour())
        .bind(institution.closing_hour())
        .bind(institution.is_active())
        .bind(institution.elective_cycle_id().as_uuid())
        .execute(&self.pool)
        .await;

        result.map(|_| ()).map_err(|e| {
            cycle_reference_error(
                &institution.elective_cycle_id(),
                violation(&e),
                "Failed to save institution",
                e,
            )
        })
    }

    async fn find_by_id(&self, id: &InstitutionId) -> Result<Option<Institution>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, opening_hour, closing_hour, is_active, elective_cycle_id
            FROM institutions WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch institution", e))?;

        row.as_ref().map(row_to_institution).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Institution>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, opening_hour, closing_hour, is_active, elective_cycle_id
            FROM institutions
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list institutions", e))?;

        rows.iter().map(row_to_institution).collect()
    }

    async fn set_cycle(
        &self,
        institution_id: &InstitutionId,
        cycle_id: &ElectiveCycleId,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE institutions SET elective_cycle_id = $2 WHERE id = $1")
            .bind(institution_id.as_uuid())
            .bind(cycle_id.as_uuid())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(DomainError::new(
                ErrorCode::InstitutionNotFound,
                format!("Institution not found: {}", institution_id),
            )),
            Ok(_) => Ok(()),
            Err(e) => Err(cycle_reference_error(
                cycle_id,
                violation(&e),
                "Failed to update institution cycle",
                e,
            )),
        }
    }

    async fn count_by_cycle(&self, cycle_id: &ElectiveCycleId) -> Result<u32, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM institutions WHERE elective_cycle_id = $1")
                .bind(cycle_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count institutions", e))?;

        u32::try_from(result.0)
            .map_err(|e| DomainError::database("Institution count overflow", e))
    }
}

fn row_to_institution(row: &PgRow) -> Result<Institution, DomainError> {
    let invalid = |e: sqlx::Error| DomainError::database("Invalid institution row", e);

    let id: Uuid = row.try_get("id").map_err(invalid)?;
    let name: String = row.try_get("name").map_err(invalid)?;
    let opening_hour: NaiveTime = row.try_get("opening_hour").map_err(invalid)?;
    let closing_hour: NaiveTime = row.try_get("closing_hour").map_err(invalid)?;
    let is_active: bool = row.try_get("is_active").map_err(invalid)?;
    let cycle_id: Uuid = row.try_get("elective_cycle_id").map_err(invalid)?;

    Ok(Institution::reconstitute(
        InstitutionId::from_uuid(id),
        name,
        opening_hour,
        closing_hour,
        is_active,
        ElectiveCycleId::from_uuid(cycle_id),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_violation_is_missing_cycle() {
        let cycle_id = ElectiveCycleId::new();
        let err = cycle_reference_error(
            &cycle_id,
            Some(ErrorKind::ForeignKeyViolation),
            "Failed to save institution",
            "violates foreign key constraint",
        );

        assert_eq!(err.code, ErrorCode::ElectiveCycleNotFound);
        assert_eq!(err.message, format!("Elective cycle not found: {}", cycle_id));
    }

    #[test]
    fn other_failures_keep_their_context() {
        let err = cycle_reference_error(
            &ElectiveCycleId::new(),
            Some(ErrorKind::CheckViolation),
            "Failed to save institution",
            "opening before closing",
        );

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(
            err.message,
            "Failed to save institution: opening before closing"
        );
    }
}
