//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem or process side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs consumed by CI.

pub mod models;
