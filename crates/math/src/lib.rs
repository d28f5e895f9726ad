/// Mathematical utilities for the Ebb trading core
///
/// This crate provides the exact arithmetic the synthesizers and the
/// route-book aggregator are built on: display/base-unit conversion with a
/// single documented rounding rule, and pure conversions between
/// trading-function coefficients and display prices.
///
/// All computation uses arbitrary-precision integers and decimals until the
/// final, explicitly rounded display step. Base-unit amounts routinely
/// exceed the exact-integer range of an f64, so native floats never touch
/// them.

pub mod convert;
pub mod price;

// Re-export commonly used functions
pub use convert::*;
pub use price::*;
