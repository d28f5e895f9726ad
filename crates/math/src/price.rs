/// Conversions between trading-function coefficients and display prices
///
/// A position over the canonical pair (asset 1, asset 2) carries the
/// constant-sum invariant `p * delta_1 + q * delta_2`, so at equality the
/// base-unit exchange rate is `delta_2 / delta_1 = p / q`. Display prices
/// adjust that ratio by the two assets' exponents. The direction is always
/// an explicit parameter; it is never inferred from the operands.

use bigdecimal::BigDecimal;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use ebb_types::{EbbError, EbbResult, Side, BPS_DENOMINATOR};

use crate::convert::{
    biguint_pow10, decimal_from_biguint, is_positive, pow10, round_to_base_units,
};

// ============================================================================
// Price Direction
// ============================================================================

/// Which asset of the canonical pair a price is quoted for.
///
/// `Asset1` yields units of asset 2 per unit of asset 1; `Asset2` the
/// reciprocal orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceOf {
    Asset1,
    Asset2,
}

// ============================================================================
// Coefficients -> Price
// ============================================================================

/// Display price from trading-function coefficients.
///
/// `PriceOf::Asset1`: `(p / q) * 10^(exponent_1 - exponent_2)`, in units of
/// asset 2 per unit of asset 1. `PriceOf::Asset2` is the reciprocal,
/// computed directly from `q / p` rather than by dividing twice.
pub fn price_from_pq(
    p: &BigUint,
    q: &BigUint,
    exponent_1: u32,
    exponent_2: u32,
    direction: PriceOf,
) -> EbbResult<BigDecimal> {
    if p.is_zero() || q.is_zero() {
        return Err(EbbError::degenerate(format!(
            "price undefined for p={}, q={}",
            p, q
        )));
    }
    let (numerator, denominator, shift) = match direction {
        PriceOf::Asset1 => (p, q, exponent_1 as i64 - exponent_2 as i64),
        PriceOf::Asset2 => (q, p, exponent_2 as i64 - exponent_1 as i64),
    };
    let ratio = decimal_from_biguint(numerator) / decimal_from_biguint(denominator);
    Ok(ratio * pow10(shift))
}

// ============================================================================
// Price -> Coefficients
// ============================================================================

/// Derive integer coefficients from a display price of asset 1 in asset 2.
///
/// `p = round(price * 10^exponent_2)` (half away from zero on the base-unit
/// integer) and `q = 10^exponent_1`, so re-deriving through [`price_from_pq`]
/// reproduces the price within half a base unit of asset 2 per whole unit of
/// asset 1, inside the coarser of the two display precisions.
pub fn coefficients_from_price(
    price_of_asset_1: &BigDecimal,
    exponent_1: u32,
    exponent_2: u32,
) -> EbbResult<(BigUint, BigUint)> {
    if !is_positive(price_of_asset_1) {
        return Err(EbbError::invalid_input(
            "price",
            format!("{} is not positive", price_of_asset_1),
        ));
    }
    let p = round_to_base_units(price_of_asset_1, exponent_2)?;
    if p.is_zero() {
        return Err(EbbError::degenerate(format!(
            "price {} rounds to zero at exponent {}",
            price_of_asset_1, exponent_2
        )));
    }
    let q = biguint_pow10(exponent_1);
    Ok((p, q))
}

// ============================================================================
// Fee Adjustment
// ============================================================================

/// Fee discount factor `gamma = (10000 - fee_bps) / 10000`, exact
pub fn gamma(fee_bps: u16) -> EbbResult<BigDecimal> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(EbbError::invalid_input(
            "fee_bps",
            format!("{} out of range [0, {})", fee_bps, BPS_DENOMINATOR),
        ));
    }
    Ok(BigDecimal::new((BPS_DENOMINATOR - fee_bps).into(), 4))
}

/// Price after the proportional fee.
///
/// Selling at a quoted price, the fee shrinks proceeds: `price * gamma`.
/// Buying, it inflates cost: `price / gamma`. The two formulas are exact
/// reciprocal images of each other: `effective(Buy, price)` equals
/// `1 / effective(Sell, 1 / price)`, so neither side can be derived from
/// the other with the naive one-sided discount.
pub fn effective_price(base_price: &BigDecimal, fee_bps: u16, side: Side) -> EbbResult<BigDecimal> {
    if !is_positive(base_price) {
        return Err(EbbError::invalid_input(
            "price",
            format!("{} is not positive", base_price),
        ));
    }
    let gamma = gamma(fee_bps)?;
    Ok(match side {
        Side::Sell => base_price * gamma,
        Side::Buy => base_price / gamma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_from_pq_orientations() {
        // p/q = 2 with equal exponents: asset 1 is worth 2 units of asset 2
        let p = BigUint::from(2_000_000u32);
        let q = BigUint::from(1_000_000u32);
        let of_1 = price_from_pq(&p, &q, 6, 6, PriceOf::Asset1).unwrap();
        let of_2 = price_from_pq(&p, &q, 6, 6, PriceOf::Asset2).unwrap();
        assert_eq!(of_1, dec("2"));
        assert_eq!(of_2, dec("0.5"));
    }

    #[test]
    fn test_price_from_pq_exponent_shift() {
        // Same coefficient ratio, mismatched exponents (6 vs 9)
        let p = BigUint::from(2u8);
        let q = BigUint::from(1u8);
        let price = price_from_pq(&p, &q, 6, 9, PriceOf::Asset1).unwrap();
        assert_eq!(price, dec("0.002"));
    }

    #[test]
    fn test_price_from_pq_rejects_zero_coefficients() {
        let err = price_from_pq(&BigUint::zero(), &BigUint::from(1u8), 6, 6, PriceOf::Asset1);
        assert!(matches!(err, Err(EbbError::DegenerateCoefficients { .. })));
    }

    #[test]
    fn test_coefficients_from_price_spec_scenario() {
        // Exponents (6, 9), price 2.0 of asset 1 in asset 2
        let (p, q) = coefficients_from_price(&dec("2.0"), 6, 9).unwrap();
        assert_eq!(p, BigUint::from(2_000_000_000u64));
        assert_eq!(q, BigUint::from(1_000_000u64));
        let rederived = price_from_pq(&p, &q, 6, 9, PriceOf::Asset1).unwrap();
        assert_eq!(rederived, dec("2.0"));
    }

    #[test]
    fn test_coefficients_from_price_rejects_vanishing_price() {
        // Below half a base unit of asset 2 per unit of asset 1
        let err = coefficients_from_price(&dec("0.0000004"), 6, 6);
        assert!(matches!(err, Err(EbbError::DegenerateCoefficients { .. })));
    }

    #[test]
    fn test_effective_price_zero_fee_is_identity() {
        let price = dec("1.25");
        assert_eq!(effective_price(&price, 0, Side::Sell).unwrap(), price);
        assert_eq!(effective_price(&price, 0, Side::Buy).unwrap(), price);
    }

    #[test]
    fn test_effective_price_direction() {
        let price = dec("100");
        // 25 bps: gamma = 0.9975
        let sell = effective_price(&price, 25, Side::Sell).unwrap();
        let buy = effective_price(&price, 25, Side::Buy).unwrap();
        assert_eq!(sell, dec("99.75"));
        assert!(sell < price);
        assert!(buy > price);
    }

    proptest! {
        /// Round-trip law: deriving coefficients from a price and reading
        /// the price back recovers the input exactly when it sits on the
        /// asset-2 display grid, and within half a base unit otherwise.
        #[test]
        fn prop_price_round_trip(
            units in 1u64..1_000_000_000,
            scale in 0u32..6,
            exponent_1 in 0u32..12,
            exponent_2 in 0u32..12,
        ) {
            let price = BigDecimal::new(units.into(), scale as i64);
            prop_assume!(price > BigDecimal::from(0));

            match coefficients_from_price(&price, exponent_1, exponent_2) {
                Ok((p, q)) => {
                    let rederived =
                        price_from_pq(&p, &q, exponent_1, exponent_2, PriceOf::Asset1).unwrap();
                    // Half a base unit of asset 2 per whole unit of asset 1
                    let tolerance = BigDecimal::new(5.into(), exponent_2 as i64 + 1);
                    let error = (rederived - &price).abs();
                    prop_assert!(error <= tolerance,
                        "price {} round-tripped with error {}", price, error);
                }
                // Only legitimate failure: the price is below half a base
                // unit of asset 2
                Err(EbbError::DegenerateCoefficients { .. }) => {
                    let half_unit = BigDecimal::new(5.into(), exponent_2 as i64 + 1);
                    prop_assert!(price <= half_unit);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        /// Effective sell price never exceeds the base price, with equality
        /// exactly at zero fee.
        #[test]
        fn prop_effective_sell_discounts(
            units in 1u64..1_000_000_000,
            scale in 0u32..9,
            fee_bps in 0u16..10_000,
        ) {
            let price = BigDecimal::new(units.into(), scale as i64);
            let effective = effective_price(&price, fee_bps, Side::Sell).unwrap();
            if fee_bps == 0 {
                prop_assert_eq!(effective, price);
            } else {
                prop_assert!(effective < price);
            }
        }

        /// Buy-side and sell-side fee formulas are mutually
        /// reciprocal-consistent: buying at price P costs the same as what
        /// selling at 1/P yields, inverted.
        #[test]
        fn prop_effective_price_reciprocal_consistency(
            units in 1u64..1_000_000,
            fee_bps in 0u16..10_000,
        ) {
            let price = BigDecimal::from(units);
            let buy = effective_price(&price, fee_bps, Side::Buy).unwrap();
            // 1 / effective(Sell, 1/P) = 1 / ((1/P) * gamma) = P / gamma
            let expected = &price / gamma(fee_bps).unwrap();
            let error = (buy - expected).abs();
            prop_assert!(error < BigDecimal::new(1.into(), 50));
        }
    }
}
