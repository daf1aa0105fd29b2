//! Validated in-memory domain models.
//!
//! # Responsibility
//! - Define the crate's entities and their mutation rules.
//! - Keep derived values (age, diameter, area, total salary) consistent
//!   with stored state at every observation point.
//!
//! # Invariants
//! - Entities are independent leaves; none depends on another.
//! - A rejected write never leaves partial state behind.

pub mod circle;
pub mod error;
pub mod number;
pub mod person;
