//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep wire/state/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — validation state, portal records, report/output structs.
//! - `constants.rs` — stable constants (portal defaults, mail domain).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the persisted
//! state schema under `~/.config/tipuy/`. Keep schema-impacting changes
//! explicit.

pub mod constants;
pub mod models;
