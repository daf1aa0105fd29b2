//! Core domain models for modelbook.
//! This crate is the single source of truth for validation invariants.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::circle::CircleShape;
pub use model::error::InvalidArgument;
pub use model::number::ValidatedNumber;
pub use model::person::PersonRecord;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
