/// AMM position types: trading pairs, trading functions, reserves

use bigdecimal::BigDecimal;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::assets::{cmp_asset_ids, AssetRef};
use crate::constants::{BPS_DENOMINATOR, NONCE_LEN};
use crate::errors::EbbError;
use crate::EbbResult;

// ============================================================================
// Trading Pair
// ============================================================================

/// A canonically ordered pair of assets.
///
/// Invariant: `asset_1.id < asset_2.id` under the lexicographic byte order.
/// A position's coefficients are defined relative to this assignment, so a
/// swapped pair silently inverts the resulting price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradingPair {
    asset_1: AssetRef,
    asset_2: AssetRef,
}

impl TradingPair {
    /// Build a canonical pair from the two assets of a market, in any order.
    ///
    /// Returns the pair plus a flag reporting whether the first argument
    /// landed in the asset-1 slot. Identical assets are rejected.
    pub fn new(a: AssetRef, b: AssetRef) -> EbbResult<(Self, bool)> {
        match cmp_asset_ids(&a.id, &b.id) {
            Ordering::Less => Ok((
                Self {
                    asset_1: a,
                    asset_2: b,
                },
                true,
            )),
            Ordering::Greater => Ok((
                Self {
                    asset_1: b,
                    asset_2: a,
                },
                false,
            )),
            Ordering::Equal => Err(EbbError::invalid_input(
                "pair",
                format!("assets are identical: {}", a.id),
            )),
        }
    }

    pub fn asset_1(&self) -> &AssetRef {
        &self.asset_1
    }

    pub fn asset_2(&self) -> &AssetRef {
        &self.asset_2
    }
}

// ============================================================================
// Trading Function
// ============================================================================

/// Fixed-point coefficients of the constant-sum trading function
/// `p * delta_1 + q * delta_2`, plus a proportional fee in basis points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradingFunction {
    /// Coefficient on the asset-1 leg
    pub p: BigUint,
    /// Coefficient on the asset-2 leg
    pub q: BigUint,
    /// Proportional fee in basis points, in [0, 10000)
    pub fee_bps: u16,
}

impl TradingFunction {
    /// Construct a trading function, validating coefficients and fee.
    pub fn new(p: BigUint, q: BigUint, fee_bps: u16) -> EbbResult<Self> {
        if p.is_zero() || q.is_zero() {
            return Err(EbbError::degenerate("coefficients must be nonzero"));
        }
        if fee_bps >= BPS_DENOMINATOR {
            return Err(EbbError::invalid_input(
                "fee_bps",
                format!("{} out of range [0, {})", fee_bps, BPS_DENOMINATOR),
            ));
        }
        Ok(Self { p, q, fee_bps })
    }
}

// ============================================================================
// Reserves
// ============================================================================

/// Base-unit holdings on each side of a position
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reserves {
    /// Asset-1 base units
    pub r1: BigUint,
    /// Asset-2 base units
    pub r2: BigUint,
}

impl Reserves {
    /// Reserves funded entirely on the asset-1 side
    pub fn from_asset_1(r1: BigUint) -> Self {
        Self {
            r1,
            r2: BigUint::zero(),
        }
    }

    /// Reserves funded entirely on the asset-2 side
    pub fn from_asset_2(r2: BigUint) -> Self {
        Self {
            r1: BigUint::zero(),
            r2,
        }
    }

    /// True when exactly one side is funded (the synthesis-time invariant)
    pub fn is_single_sided(&self) -> bool {
        self.r1.is_zero() != self.r2.is_zero()
    }
}

// ============================================================================
// Position
// ============================================================================

/// Lifecycle state of a position. The core only ever constructs `Opened`
/// positions; the other states are produced on-chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PositionState {
    Opened,
    Closed,
    Withdrawn,
}

/// A discrete AMM position: an on-chain resting order defined by trading
/// function coefficients and a pair of reserves, fillable by any
/// counterparty.
///
/// Positions are constructed transiently per user submission and handed off
/// to the transaction planner; the core never mutates one after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    /// Canonically ordered asset pair
    pub pair: TradingPair,
    /// Trading-function coefficients and fee
    pub phi: TradingFunction,
    /// Base-unit reserves; exactly one side is funded at synthesis time
    pub reserves: Reserves,
    /// Random salt distinguishing otherwise-identical positions
    pub nonce: [u8; NONCE_LEN],
    /// Whether the position closes itself once fully filled
    pub close_on_fill: bool,
    /// Lifecycle state
    pub state: PositionState,
}

// ============================================================================
// Derived Order View
// ============================================================================

/// Trade direction in a UI-chosen base/quote frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A position re-projected into a base/quote frame for display.
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Direction relative to the base asset
    pub side: Side,
    /// Funded amount in display units of the funding asset
    pub amount: BigDecimal,
    /// Fee-free price, quote display units per base display unit
    pub price: BigDecimal,
    /// Price after the proportional fee
    pub effective_price: BigDecimal,
}
