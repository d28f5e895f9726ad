/// Display-unit / base-unit conversion with one documented rounding rule
///
/// Every rounding step in the core goes through `round_to_base_units`:
/// round half away from zero on the base-unit integer
/// (`RoundingMode::HalfUp`). Using a single rule keeps repeated edits of the
/// same order from drifting.

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use ebb_types::{EbbError, EbbResult};

/// The rounding mode used for every display-to-base-unit conversion
pub const BASE_UNIT_ROUNDING: RoundingMode = RoundingMode::HalfUp;

// ============================================================================
// Powers of Ten
// ============================================================================

/// 10^exponent as an exact decimal, for any sign of exponent
pub fn pow10(exponent: i64) -> BigDecimal {
    // BigDecimal::new(d, scale) represents d * 10^(-scale)
    BigDecimal::new(BigInt::one(), -exponent)
}

/// 10^exponent as an unsigned integer
pub fn biguint_pow10(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}

// ============================================================================
// Unit Conversion
// ============================================================================

/// Convert a display-unit value to base units of an asset with the given
/// exponent, rounding half away from zero.
///
/// Fails on negative input; zero is allowed (callers that need positivity
/// check before converting).
pub fn round_to_base_units(display: &BigDecimal, exponent: u32) -> EbbResult<BigUint> {
    let scaled = display * pow10(exponent as i64);
    let rounded = scaled.with_scale_round(0, BASE_UNIT_ROUNDING);
    let (integer, _scale) = rounded.into_bigint_and_exponent();
    integer.to_biguint().ok_or_else(|| {
        EbbError::invalid_input("amount", format!("negative value {}", display))
    })
}

/// Convert base units back to display units of an asset with the given
/// exponent. Exact; no rounding occurs in this direction.
pub fn from_base_units(amount: &BigUint, exponent: u32) -> BigDecimal {
    BigDecimal::new(BigInt::from(amount.clone()), exponent as i64)
}

/// Exact decimal view of an unsigned integer
pub fn decimal_from_biguint(value: &BigUint) -> BigDecimal {
    BigDecimal::from(BigInt::from(value.clone()))
}

/// True when the value is strictly positive
pub fn is_positive(value: &BigDecimal) -> bool {
    value > &BigDecimal::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pow10_both_signs() {
        assert_eq!(pow10(0), dec("1"));
        assert_eq!(pow10(3), dec("1000"));
        assert_eq!(pow10(-3), dec("0.001"));
    }

    #[test]
    fn test_round_to_base_units_exact() {
        let amount = round_to_base_units(&dec("100"), 9).unwrap();
        assert_eq!(amount, BigUint::from(100_000_000_000u64));
    }

    #[test]
    fn test_round_to_base_units_half_away_from_zero() {
        // 1.5 base units rounds up, 1.4 rounds down
        assert_eq!(
            round_to_base_units(&dec("0.0000015"), 6).unwrap(),
            BigUint::from(2u8)
        );
        assert_eq!(
            round_to_base_units(&dec("0.0000014"), 6).unwrap(),
            BigUint::from(1u8)
        );
    }

    #[test]
    fn test_round_to_base_units_rejects_negative() {
        assert!(round_to_base_units(&dec("-1"), 6).is_err());
    }

    #[test]
    fn test_base_unit_round_trip_is_exact() {
        // Display values already on the asset's grid survive unchanged
        let display = dec("123.456789");
        let base = round_to_base_units(&display, 6).unwrap();
        assert_eq!(from_base_units(&base, 6), display.with_scale(6));
    }

    #[test]
    fn test_amounts_beyond_f64_range() {
        // 2^80 base units: far outside f64's exact-integer range
        let big = BigUint::from(1u8) << 80;
        let display = from_base_units(&big, 6);
        assert_eq!(round_to_base_units(&display, 6).unwrap(), big);
    }
}
