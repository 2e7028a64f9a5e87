//! HTTP adapter for the elective cycle module.
//!
//! # Endpoints
//!
//! - `GET /api/elective-cycles` - List cycles (optionally filtered)
//! - `POST /api/elective-cycles` - Create the cycle for a year
//! - `GET /api/elective-cycles/:id` - Fetch a cycle by id or year
//! - `POST /api/elective-cycles/:id/disable` - Deactivate a cycle
//! - `DELETE /api/elective-cycles/:id` - Delete an unreferenced cycle
//! - `POST /api/elective-cycles/:id/propagate` - Point every institution at the cycle

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::academic_router;
