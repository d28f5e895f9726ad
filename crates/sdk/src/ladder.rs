/// Range-liquidity ladder synthesis
///
/// A ladder approximates continuous liquidity provision over a price band
/// with N discrete single-sided positions. Levels below the market price
/// rest as buys funded in the quote asset; levels above rest as sells
/// funded in the base asset. Each rung goes through the same coefficient
/// construction as a limit order, but stays open after filling so the
/// liquidity keeps working the band.

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use ebb_types::{
    AssetRef, EbbError, EbbResult, Position, Side, MAX_LADDER_POSITIONS, MIN_LADDER_POSITIONS,
};

use crate::synth::{require_positive, synthesize_position};

/// Decimal places used when placing geometric grid levels
const LEVEL_SCALE: i64 = 12;

// ============================================================================
// Intent
// ============================================================================

/// How the N price levels divide the band.
///
/// This materially changes the shape of provided depth, so it is an
/// explicit parameter rather than a hardcoded default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Spacing {
    /// Equal price increments between adjacent levels
    #[default]
    Linear,
    /// Equal price ratios between adjacent levels
    Geometric,
}

/// A user's range-liquidity intent in the UI base/quote frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeLiquidityIntent {
    /// Base asset of the UI frame
    pub base: AssetRef,
    /// Quote asset of the UI frame
    pub quote: AssetRef,
    /// Total liquidity to deploy, in quote display units
    pub target_liquidity: BigDecimal,
    /// Lower bound of the price band, quote per base
    pub lower_price: BigDecimal,
    /// Upper bound of the price band, quote per base
    pub upper_price: BigDecimal,
    /// Current market price, quote per base; decides which side each
    /// level rests on
    pub market_price: BigDecimal,
    /// Fee shared by every rung, basis points in [0, 10000)
    pub fee_bps: u16,
    /// Number of rungs, in [5, 15]
    pub positions: usize,
    /// Level placement across the band
    pub spacing: Spacing,
}

// ============================================================================
// Synthesis
// ============================================================================

/// Build the N positions of a range-liquidity ladder, sorted by increasing
/// price.
///
/// Allocation is even in quote terms: each rung is funded with
/// `target_liquidity / N` worth of value; sell rungs convert that quote
/// allocation into a base amount by dividing by their own level price.
/// Pure function; atomicity of submitting the batch is the caller's
/// responsibility.
pub fn range_liquidity_positions(intent: &RangeLiquidityIntent) -> EbbResult<Vec<Position>> {
    if intent.positions < MIN_LADDER_POSITIONS || intent.positions > MAX_LADDER_POSITIONS {
        return Err(EbbError::InvalidPositionCount {
            requested: intent.positions,
            min: MIN_LADDER_POSITIONS,
            max: MAX_LADDER_POSITIONS,
        });
    }
    require_positive("lower_price", &intent.lower_price)?;
    if intent.lower_price >= intent.upper_price {
        return Err(EbbError::invalid_range(
            &intent.lower_price,
            &intent.upper_price,
        ));
    }
    require_positive("target_liquidity", &intent.target_liquidity)?;
    require_positive("market_price", &intent.market_price)?;

    let levels = price_levels(
        &intent.lower_price,
        &intent.upper_price,
        intent.positions,
        intent.spacing,
    )?;

    let per_level_quote = &intent.target_liquidity / BigDecimal::from(intent.positions as u64);

    let mut rungs = Vec::with_capacity(levels.len());
    for level in &levels {
        // Tie-break: a level coincident with the market price rests on the
        // bid, keeping its funding in the quote denomination of
        // `target_liquidity`
        let side = if level <= &intent.market_price {
            Side::Buy
        } else {
            Side::Sell
        };
        let input = match side {
            Side::Buy => per_level_quote.clone(),
            Side::Sell => &per_level_quote / level,
        };
        rungs.push(synthesize_position(
            &intent.base,
            &intent.quote,
            side,
            level,
            &input,
            intent.fee_bps,
            // Ladder rungs recycle: stay open after a fill
            false,
        )?);
    }

    // A coarse quote exponent can quantize adjacent display levels to the
    // same integer coefficients even when the display grid itself is
    // strictly increasing
    if rungs.windows(2).any(|pair| pair[0].phi == pair[1].phi) {
        return Err(EbbError::invalid_input(
            "spacing",
            format!(
                "band [{}, {}] too narrow for {} levels at {} precision",
                intent.lower_price, intent.upper_price, intent.positions, intent.quote.symbol
            ),
        ));
    }

    tracing::debug!(
        rungs = rungs.len(),
        spacing = ?intent.spacing,
        lower = %intent.lower_price,
        upper = %intent.upper_price,
        "synthesized range liquidity ladder"
    );
    Ok(rungs)
}

/// N strictly increasing levels across [lower, upper], endpoints included
fn price_levels(
    lower: &BigDecimal,
    upper: &BigDecimal,
    count: usize,
    spacing: Spacing,
) -> EbbResult<Vec<BigDecimal>> {
    let steps = (count - 1) as u64;
    let mut levels = Vec::with_capacity(count);

    match spacing {
        Spacing::Linear => {
            // level_i = (lower * (steps - i) + upper * i) / steps: exact at
            // both endpoints, monotone in between
            for i in 0..count as u64 {
                let level = (lower * BigDecimal::from(steps - i) + upper * BigDecimal::from(i))
                    / BigDecimal::from(steps);
                levels.push(level);
            }
        }
        Spacing::Geometric => {
            // Only the (N-1)-th root runs through f64; it places the grid
            // between display-unit bounds and never touches base-unit
            // amounts
            let lower_f = lower.to_f64().unwrap_or(0.0);
            let upper_f = upper.to_f64().unwrap_or(0.0);
            let ratio_f = (upper_f / lower_f).powf(1.0 / steps as f64);
            let ratio = BigDecimal::from_f64(ratio_f)
                .filter(|r| r > &BigDecimal::from(1u8))
                .ok_or_else(|| {
                    EbbError::invalid_input(
                        "spacing",
                        format!(
                            "band [{}, {}] too narrow for geometric spacing",
                            lower, upper
                        ),
                    )
                })?;

            let mut level = lower.clone();
            for i in 0..count as u64 {
                if i == 0 {
                    levels.push(lower.clone());
                } else if i == steps {
                    levels.push(upper.clone());
                } else {
                    level = (&level * &ratio).with_scale_round(LEVEL_SCALE, RoundingMode::HalfUp);
                    levels.push(level.clone());
                }
            }
        }
    }

    // Grid collapse (bounds closer than the level scale resolves) would
    // otherwise surface as duplicate positions
    if levels.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(EbbError::invalid_input(
            "spacing",
            format!("band [{}, {}] too narrow for {} levels", lower, upper, count),
        ));
    }
    Ok(levels)
}
