//! # Ebb SDK - Position Synthesis and Route-Book Aggregation
//!
//! This crate turns high-level trading intents into valid on-chain AMM
//! position parameters and aggregates trade-simulation output into an
//! order-book view. It provides:
//!
//! - A limit-order synthesizer producing one single-sided position
//! - A range-liquidity ladder synthesizer producing N single-sided
//!   positions across a price band
//! - A route-book aggregator turning simulation traces into sorted,
//!   depth-accumulated price levels
//! - A projection of positions back into a base/quote order view
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! memory between calls. Network concerns such as fetching simulation
//! traces and submitting positions to the transaction planner belong to
//! callers.

pub mod book;
pub mod ladder;
pub mod limit;
pub mod order;

mod synth;

// Re-export commonly used items
pub use book::{build_book, build_direct_book, BookParams};
pub use ladder::{range_liquidity_positions, RangeLiquidityIntent, Spacing};
pub use limit::{limit_order_position, LimitOrderIntent};
pub use order::order_from_position;
