//! Move legality core
//!
//! Pure functions over a read-only board snapshot. Nothing in this module
//! keeps state between calls, so a single `BoardState` may be shared across
//! threads as long as nobody mutates it mid-validation.
//!
//! # Module Organization
//!
//! - `types` - Board coordinates (`Position`), move descriptors (`Move`), square views
//! - `error` - `RulesError` for precondition violations
//! - `rules` - Board storage and the per-piece legality predicates

pub mod error;
pub mod rules;
pub mod types;

pub use error::{RulesError, RulesResult};
pub use types::{Move, Position, Square};
