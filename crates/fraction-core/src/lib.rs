//! Fraction-core: Shared types, errors, configuration, and fixed-point math
//!
//! This crate provides the foundational types used across the Fraction workspace.

pub mod config;
pub mod errors;
pub mod math;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
