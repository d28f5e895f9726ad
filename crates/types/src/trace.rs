/// Simulation trace types consumed by the route-book aggregator

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::assets::AssetRef;
use crate::constants::DIRECT_TRACE_LEGS;
use crate::errors::EbbError;
use crate::EbbResult;

/// One leg of a simulated trade path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceLeg {
    /// Asset held at this point of the path
    pub asset: AssetRef,
    /// Base-unit amount at this point of the path
    pub amount: BigUint,
}

impl TraceLeg {
    pub fn new(asset: AssetRef, amount: BigUint) -> Self {
        Self { asset, amount }
    }
}

/// One simulated path a trade might take through one or more positions.
///
/// The first leg is the input, the last leg is the output, and interior
/// legs are intermediate hops. A trace of exactly two legs is a direct,
/// single-position fill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trace {
    pub legs: Vec<TraceLeg>,
}

impl Trace {
    pub fn new(legs: Vec<TraceLeg>) -> Self {
        Self { legs }
    }

    /// Structural validation: at least input and output, nonzero amounts.
    ///
    /// A violation is a contract breach by the simulation collaborator, not
    /// a market condition.
    pub fn validate(&self) -> EbbResult<()> {
        if self.legs.len() < DIRECT_TRACE_LEGS {
            return Err(EbbError::invalid_trace(format!(
                "trace has {} legs, need at least {}",
                self.legs.len(),
                DIRECT_TRACE_LEGS
            )));
        }
        for (index, leg) in self.legs.iter().enumerate() {
            if leg.amount.is_zero() {
                return Err(EbbError::invalid_trace(format!(
                    "leg {} ({}) has zero amount",
                    index, leg.asset.symbol
                )));
            }
        }
        Ok(())
    }

    /// Input leg (first)
    pub fn input(&self) -> EbbResult<&TraceLeg> {
        self.legs
            .first()
            .ok_or_else(|| EbbError::invalid_trace("trace has no legs"))
    }

    /// Output leg (last)
    pub fn output(&self) -> EbbResult<&TraceLeg> {
        self.legs
            .last()
            .ok_or_else(|| EbbError::invalid_trace("trace has no legs"))
    }

    /// Number of legs; 2 denotes a direct fill
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// True for a direct, single-position fill
    pub fn is_direct(&self) -> bool {
        self.legs.len() == DIRECT_TRACE_LEGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ASSET_ID_LEN;
    use crate::AssetId;

    fn asset(first: u8, symbol: &str) -> AssetRef {
        let mut bytes = [0u8; ASSET_ID_LEN];
        bytes[0] = first;
        AssetRef::new(AssetId::new(bytes), 6, symbol)
    }

    fn leg(first: u8, symbol: &str, amount: u64) -> TraceLeg {
        TraceLeg::new(asset(first, symbol), BigUint::from(amount))
    }

    #[test]
    fn test_validate_rejects_short_traces() {
        let trace = Trace::new(vec![leg(1, "A", 100)]);
        assert!(matches!(
            trace.validate(),
            Err(EbbError::InvalidTrace { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_amount_legs() {
        let trace = Trace::new(vec![leg(1, "A", 100), leg(2, "B", 0)]);
        assert!(matches!(
            trace.validate(),
            Err(EbbError::InvalidTrace { .. })
        ));
    }

    #[test]
    fn test_direct_trace_detection() {
        let direct = Trace::new(vec![leg(1, "A", 100), leg(2, "B", 50)]);
        assert!(direct.validate().is_ok());
        assert!(direct.is_direct());
        assert_eq!(direct.hop_count(), 2);

        let hopped = Trace::new(vec![leg(1, "A", 100), leg(3, "H", 70), leg(2, "B", 50)]);
        assert!(hopped.validate().is_ok());
        assert!(!hopped.is_direct());
        assert_eq!(hopped.hop_count(), 3);
    }
}
