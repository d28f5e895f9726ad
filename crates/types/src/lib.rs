/// Shared types for the Ebb trading core
///
/// This crate provides the common data model, constants, and error types
/// used across the math and SDK crates: asset references, trading-function
/// coefficients, positions, simulation traces, and order-book rows.

pub mod assets;
pub mod book;
pub mod constants;
pub mod errors;
pub mod position;
pub mod trace;

// Re-export all public types
pub use assets::*;
pub use book::*;
pub use constants::*;
pub use errors::*;
pub use position::*;
pub use trace::*;

/// Result type alias using the shared error type
pub type EbbResult<T> = std::result::Result<T, EbbError>;
