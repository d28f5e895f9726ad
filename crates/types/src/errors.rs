//! # Core Error Types
//!
//! Error taxonomy shared by the synthesizers and the route-book aggregator.
//! Synthesizer errors surface synchronously, before any network interaction
//! is attempted; the aggregator raises only on structurally malformed input.

use thiserror::Error;

/// Errors produced by the Ebb trading core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EbbError {
    /// Non-positive price/amount, fee out of range, identical assets, etc.
    #[error("Invalid input '{what}': {reason}")]
    InvalidInput { what: &'static str, reason: String },

    /// Price band with lower bound >= upper bound
    #[error("Invalid price range: lower {lower} >= upper {upper}")]
    InvalidRange { lower: String, upper: String },

    /// Ladder position count outside the supported window
    #[error("Invalid position count: {requested} (must be in [{min}, {max}])")]
    InvalidPositionCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Price rounds to a zero trading-function coefficient
    #[error("Degenerate coefficients: {reason}")]
    DegenerateCoefficients { reason: String },

    /// Malformed simulation trace: a contract violation by the simulator
    #[error("Invalid trace: {reason}")]
    InvalidTrace { reason: String },

    /// No route can fill the requested size. The aggregator never raises
    /// this (empty input yields an empty book); callers use it to present
    /// the "no liquidity at this size" state.
    #[error("No liquidity available at this size")]
    NoLiquidity,
}

impl EbbError {
    /// Create an invalid-input error with field context
    pub fn invalid_input(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            what,
            reason: reason.into(),
        }
    }

    /// Create an invalid-range error from the offending bounds
    pub fn invalid_range(lower: impl ToString, upper: impl ToString) -> Self {
        Self::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    /// Create a degenerate-coefficient error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateCoefficients {
            reason: reason.into(),
        }
    }

    /// Create an invalid-trace error
    pub fn invalid_trace(reason: impl Into<String>) -> Self {
        Self::InvalidTrace {
            reason: reason.into(),
        }
    }
}
