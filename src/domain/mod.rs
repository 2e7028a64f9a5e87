//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status enums, errors)
//! - `academic` - Elective cycles and the institutional calendar
//! - `establishment` - Institutions referencing the cycle in effect

pub mod academic;
pub mod establishment;
pub mod foundation;
