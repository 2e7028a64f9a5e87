//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ElectiveCycleRepository` - Persistence for academic-year records
//! - `InstitutionRepository` - Institution collaborator used by propagation

mod elective_cycle_repository;
mod institution_repository;

pub use elective_cycle_repository::ElectiveCycleRepository;
pub use institution_repository::InstitutionRepository;
