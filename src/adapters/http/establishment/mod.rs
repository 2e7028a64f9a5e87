//! HTTP adapter for the institution module.
//!
//! - `GET /api/institutions` - List institutions
//! - `POST /api/institutions` - Register an institution on a cycle

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::establishment_router;
