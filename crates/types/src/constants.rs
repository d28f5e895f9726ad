/// Protocol-wide constants shared by the math and SDK crates

/// Basis-point denominator: fees are expressed as parts of 10_000
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Byte length of an on-chain asset identifier
pub const ASSET_ID_LEN: usize = 32;

/// Byte length of a position nonce
pub const NONCE_LEN: usize = 32;

/// Minimum number of rungs in a range-liquidity ladder
pub const MIN_LADDER_POSITIONS: usize = 5;

/// Maximum number of rungs in a range-liquidity ladder
pub const MAX_LADDER_POSITIONS: usize = 15;

/// Default number of rows per side of an aggregated route book
pub const DEFAULT_BOOK_LIMIT: usize = 8;

/// Legs in a direct (single-position) trace: input and output only
pub const DIRECT_TRACE_LEGS: usize = 2;
