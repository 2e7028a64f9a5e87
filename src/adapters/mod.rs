//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API over the application handlers
//! - `memory` - In-memory repositories for tests and local development
//! - `postgres` - sqlx-backed repositories

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryAcademicStore;
pub use postgres::{PostgresElectiveCycleRepository, PostgresInstitutionRepository};
