/// Aggregated route-book row types

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::position::Side;

/// One price level of an aggregated route book.
///
/// Derived on demand from simulation traces, never persisted. `amount` is
/// the worst-case binding constraint among the routes merged into this
/// level, while `total` is their summed input size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRow {
    /// Display price, quote units per base unit
    pub price: BigDecimal,
    /// Minimum input amount among merged routes, display units
    pub amount: BigDecimal,
    /// Summed input amount of merged routes, display units
    pub total: BigDecimal,
    /// Running sum of `total` from the best price outward
    pub cumulative_total: BigDecimal,
    /// Leg count of the merged routes; 2 denotes a direct fill
    pub hop_count: usize,
    /// Book side this row rests on
    pub side: Side,
}

/// Both sides of an aggregated route book, best price first on each
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteBook {
    pub buy: Vec<BookRow>,
    pub sell: Vec<BookRow>,
}

impl RouteBook {
    /// The empty book: what "no liquidity at this size" looks like
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }
}
