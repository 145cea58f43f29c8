//! Service layer for cash-forecast
//!
//! The service layer turns input records into validated recurring
//! transactions and runs the forecast over them.

pub mod import;
pub mod simulation;

pub use import::{ImportService, REQUIRED_INPUT_FIELDS};
pub use simulation::Simulation;
