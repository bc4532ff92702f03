//! Service layer containing the runner logic and side-effect helpers.
//!
//! ## Service map
//! - `sequence.rs` — the fixed four-step engine invocation list.
//! - `runner.rs` — sequential fail-fast execution, exit-status mapping.
//! - `doctor.rs` — environment preflight checks.
//! - `storage.rs` — best-effort audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod doctor;
pub mod output;
pub mod runner;
pub mod sequence;
pub mod storage;
