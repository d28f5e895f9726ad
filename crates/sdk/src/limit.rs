/// Limit-order position synthesis
///
/// A limit order is one discrete single-sided position: the funding asset
/// rests in the reserves and the trading function prices the fill. The
/// position closes itself once fully filled, so it behaves like a
/// fill-then-done order rather than recycling liquidity.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use ebb_types::{AssetRef, EbbResult, Position, Side};

use crate::synth::{require_positive, synthesize_position};

/// A user's limit-order intent in the UI base/quote frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitOrderIntent {
    /// Buy or sell the base asset
    pub side: Side,
    /// Limit price, quote display units per base display unit
    pub price: BigDecimal,
    /// Funding amount in display units of the funding asset: quote when
    /// buying, base when selling
    pub input: BigDecimal,
    /// Base asset of the UI frame
    pub base: AssetRef,
    /// Quote asset of the UI frame
    pub quote: AssetRef,
    /// Proportional fee in basis points, in [0, 10000)
    pub fee_bps: u16,
}

/// Build the single position representing a limit order.
///
/// Validation happens synchronously, before the caller goes anywhere near
/// the network: a rejected intent never produces a partially valid
/// submission.
pub fn limit_order_position(intent: &LimitOrderIntent) -> EbbResult<Position> {
    require_positive("price", &intent.price)?;
    require_positive("input", &intent.input)?;

    let position = synthesize_position(
        &intent.base,
        &intent.quote,
        intent.side,
        &intent.price,
        &intent.input,
        intent.fee_bps,
        // Limit orders are one-shot: close once filled
        true,
    )?;

    tracing::debug!(
        side = ?intent.side,
        price = %intent.price,
        base = %intent.base.symbol,
        quote = %intent.quote.symbol,
        "synthesized limit order position"
    );
    Ok(position)
}
