//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `gate.rs` — format checks, gate decision, generation payload assembly.
//! - `portal.rs` — HTTP client for the portal API + envelope parsing.
//! - `tracking.rs` — tracking-table counters and filtering.
//! - `storage.rs` — local state/session persistence + audit log.
//! - `config.rs` — `config.toml` loading with defaults.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible (`gate.rs` and `tracking.rs` are
//!   entirely pure; envelope parsing is separated from request sending).
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod gate;
pub mod output;
pub mod portal;
pub mod storage;
pub mod tracking;
