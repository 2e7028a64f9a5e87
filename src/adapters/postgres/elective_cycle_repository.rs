//! PostgreSQL implementation of ElectiveCycleRepository.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::violation;
use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{CycleStatus, DomainError, ElectiveCycleId, ErrorCode};
use crate::ports::ElectiveCycleRepository;

const SELECT_COLUMNS: &str =
    "SELECT id, year, start_date, end_date, is_active FROM elective_cycles";

/// PostgreSQL implementation of ElectiveCycleRepository.
#[derive(Clone)]
pub struct PostgresElectiveCycleRepository {
    pool: PgPool,
}

impl PostgresElectiveCycleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
        context: &str,
    ) -> Result<Vec<ElectiveCycle>, DomainError> {
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(context, e))?;
        rows.iter().map(row_to_cycle).collect()
    }
}

#[async_trait]
impl ElectiveCycleRepository for PostgresElectiveCycleRepository {
    async fn save(&self, cycle: &ElectiveCycle) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO elective_cycles (id, year, start_date, end_date, is_active)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(cycle.id().as_uuid())
        .bind(cycle.year())
        .bind(cycle.start_date())
        .bind(cycle.end_date())
        .bind(cycle.is_active())
        .execute(&self.pool)
        .await;

        result
            .map(|_| ())
            .map_err(|e| insert_error(cycle.year(), violation(&e), e))
    }

    async fn update(&self, cycle: &ElectiveCycle) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE elective_cycles SET
                start_date = $2,
                end_date = $3,
                is_active = $4
            WHERE id = $1
            "#,
        )
        .bind(cycle.id().as_uuid())
        .bind(cycle.start_date())
        .bind(cycle.end_date())
        .bind(cycle.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update elective cycle", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ElectiveCycleNotFound,
                format!("Elective cycle not found: {}", cycle.id()),
            ));
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ElectiveCycleId,
    ) -> Result<Option<ElectiveCycle>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch elective cycle", e))?;

        row.as_ref().map(row_to_cycle).transpose()
    }

    async fn find_by_year(&self, year: i32) -> Result<Option<ElectiveCycle>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE year = $1", SELECT_COLUMNS))
            .bind(year)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch elective cycle by year", e))?;

        row.as_ref().map(row_to_cycle).transpose()
    }

    async fn find_by_end_date(&self, date: NaiveDate) -> Result<Vec<ElectiveCycle>, DomainError> {
        let sql = format!("{} WHERE end_date = $1 ORDER BY year", SELECT_COLUMNS);
        self.fetch_many(
            sqlx::query(&sql).bind(date),
            "Failed to fetch elective cycles by end date",
        )
        .await
    }

    async fn find_active(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
        let sql = format!("{} WHERE is_active ORDER BY year", SELECT_COLUMNS);
        self.fetch_many(sqlx::query(&sql), "Failed to fetch active elective cycles")
            .await
    }

    async fn list_all(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
        let sql = format!("{} ORDER BY year", SELECT_COLUMNS);
        self.fetch_many(sqlx::query(&sql), "Failed to list elective cycles")
            .await
    }

    async fn exists(&self, id: &ElectiveCycleId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM elective_cycles WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check elective cycle existence", e))?;

        Ok(result.0 > 0)
    }

    async fn delete(&self, id: &ElectiveCycleId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM elective_cycles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(DomainError::new(
                ErrorCode::ElectiveCycleNotFound,
                format!("Elective cycle not found: {}", id),
            )),
            Ok(_) => Ok(()),
            Err(e) => Err(delete_error(id, violation(&e), e)),
        }
    }
}

/// UNIQUE(year) is the only constraint an insert can trip over.
fn insert_error(year: i32, kind: Option<ErrorKind>, err: impl fmt::Display) -> DomainError {
    match kind {
        Some(ErrorKind::UniqueViolation) => DomainError::new(
            ErrorCode::DuplicateYear,
            format!("Elective cycle already exists for year {}", year),
        )
        .with_detail("year", year.to_string()),
        _ => DomainError::database("Failed to insert elective cycle", err),
    }
}

/// Institutions reference cycles with ON DELETE RESTRICT.
fn delete_error(
    id: &ElectiveCycleId,
    kind: Option<ErrorKind>,
    err: impl fmt::Display,
) -> DomainError {
    match kind {
        Some(ErrorKind::ForeignKeyViolation) => DomainError::new(
            ErrorCode::CycleInUse,
            format!("Elective cycle {} is referenced by institutions", id),
        ),
        _ => DomainError::database("Failed to delete elective cycle", err),
    }
}

fn row_to_cycle(row: &PgRow) -> Result<ElectiveCycle, DomainError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Invalid elective cycle row", e))?;
    let year: i32 = row
        .try_get("year")
        .map_err(|e| DomainError::database("Invalid elective cycle row", e))?;
    let start_date: NaiveDate = row
        .try_get("start_date")
        .map_err(|e| DomainError::database("Invalid elective cycle row", e))?;
    let end_date: NaiveDate = row
        .try_get("end_date")
        .map_err(|e| DomainError::database("Invalid elective cycle row", e))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| DomainError::database("Invalid elective cycle row", e))?;

    Ok(ElectiveCycle::reconstitute(
        ElectiveCycleId::from_uuid(id),
        year,
        start_date,
        end_date,
        CycleStatus::from_is_active(is_active),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_on_insert_is_duplicate_year() {
        let err = insert_error(2026, Some(ErrorKind::UniqueViolation), "duplicate key");
        assert_eq!(err.code, ErrorCode::DuplicateYear);
        assert_eq!(err.details.get("year"), Some(&"2026".to_string()));
    }

    #[test]
    fn other_insert_failures_are_database_errors() {
        let check = insert_error(1999, Some(ErrorKind::CheckViolation), "year check");
        let io = insert_error(2026, None, "connection reset");

        assert_eq!(check.code, ErrorCode::DatabaseError);
        assert_eq!(io.code, ErrorCode::DatabaseError);
        assert!(io.message.contains("connection reset"));
    }

    #[test]
    fn foreign_key_violation_on_delete_is_cycle_in_use() {
        let id = ElectiveCycleId::new();
        let err = delete_error(&id, Some(ErrorKind::ForeignKeyViolation), "still referenced");
        assert_eq!(err.code, ErrorCode::CycleInUse);
        assert!(err.message.contains(&id.to_string()));
    }

    #[test]
    fn unique_violation_on_delete_is_not_in_use() {
        let id = ElectiveCycleId::new();
        let err = delete_error(&id, Some(ErrorKind::UniqueViolation), "x");
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
