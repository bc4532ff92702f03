//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate execution to `services/*`.
//! - Keep behavior and output schema stable.

pub mod smoke;

pub use smoke::{handle_doctor, handle_plan, handle_run};
