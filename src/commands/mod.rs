//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — validate/status/generate/reset (the gate flow).
//! - `tracking.rs` — track/sign/download.
//! - `session.rs` — stored auth-profile management.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Persist the slot outcome before surfacing a validation failure, so a
//!   failed lookup visibly closes the gate.

pub mod runtime;
pub mod session;
pub mod tracking;

pub use runtime::handle_runtime_commands;
pub use session::handle_session_commands;
pub use tracking::handle_tracking_commands;
