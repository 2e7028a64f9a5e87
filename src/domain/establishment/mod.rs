//! Establishment module - Institutions and their link to the active cycle.

mod institution;

pub use institution::{Institution, MAX_NAME_LENGTH};
