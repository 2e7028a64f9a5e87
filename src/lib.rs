//! School Admin - Elective cycle lifecycle backend
//!
//! Opens and closes the yearly elective cycle on fixed calendar anchors and
//! keeps every institution pointed at the cycle currently in effect.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
