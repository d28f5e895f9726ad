/// Projection of positions back into a base/quote order view
///
/// The chain stores positions in canonical-pair terms; UIs want them as
/// buys and sells against a chosen base asset. This projection is derived
/// on demand and never persisted; recomputing is cheap and keeps the core
/// stateless.

use num_traits::Zero;

use ebb_math::{effective_price, from_base_units, price_from_pq, PriceOf};
use ebb_types::{AssetRef, EbbError, EbbResult, Order, Position, Side};

/// Re-project a position into the given base/quote frame.
///
/// The side follows the funding asset: reserves resting in the quote asset
/// are an offer to acquire base (a buy); reserves resting in the base asset
/// are a sell. Fails on positions over a different pair or with both sides
/// funded (a filled position is no longer a single order).
pub fn order_from_position(
    position: &Position,
    base: &AssetRef,
    quote: &AssetRef,
) -> EbbResult<Order> {
    let asset_1 = position.pair.asset_1();
    let asset_2 = position.pair.asset_2();

    let base_is_asset_1 = asset_1.id == base.id && asset_2.id == quote.id;
    let base_is_asset_2 = asset_1.id == quote.id && asset_2.id == base.id;
    if !base_is_asset_1 && !base_is_asset_2 {
        return Err(EbbError::invalid_input(
            "position",
            format!(
                "pair {}/{} does not match market {}/{}",
                asset_1.symbol, asset_2.symbol, base.symbol, quote.symbol
            ),
        ));
    }
    if !position.reserves.is_single_sided() {
        return Err(EbbError::invalid_input(
            "position",
            "reserves are not single-sided; cannot project to one order",
        ));
    }

    // Quote display units per base display unit
    let direction = if base_is_asset_1 {
        PriceOf::Asset1
    } else {
        PriceOf::Asset2
    };
    let price = price_from_pq(
        &position.phi.p,
        &position.phi.q,
        asset_1.exponent,
        asset_2.exponent,
        direction,
    )?;

    let funded_in_asset_1 = !position.reserves.r1.is_zero();
    let funding_asset = if funded_in_asset_1 { asset_1 } else { asset_2 };
    let side = if funding_asset.id == quote.id {
        Side::Buy
    } else {
        Side::Sell
    };
    let funded = if funded_in_asset_1 {
        &position.reserves.r1
    } else {
        &position.reserves.r2
    };
    let amount = from_base_units(funded, funding_asset.exponent);
    let effective = effective_price(&price, position.phi.fee_bps, side)?;

    Ok(Order {
        side,
        amount,
        price,
        effective_price: effective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limit::{limit_order_position, LimitOrderIntent};
    use bigdecimal::BigDecimal;
    use ebb_types::{AssetId, ASSET_ID_LEN};
    use std::str::FromStr;

    fn asset(first: u8, exponent: u32, symbol: &str) -> AssetRef {
        let mut bytes = [0u8; ASSET_ID_LEN];
        bytes[0] = first;
        AssetRef::new(AssetId::new(bytes), exponent, symbol)
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_projection_round_trips_the_intent() {
        let base = asset(1, 6, "UM");
        let quote = asset(2, 9, "USDY");
        let intent = LimitOrderIntent {
            side: Side::Buy,
            price: dec("2.0"),
            input: dec("100"),
            base: base.clone(),
            quote: quote.clone(),
            fee_bps: 25,
        };
        let position = limit_order_position(&intent).unwrap();
        let order = order_from_position(&position, &base, &quote).unwrap();

        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.amount, dec("100"));
        assert_eq!(order.price, dec("2.0"));
        // Buying costs more after the 25 bps fee
        assert!(order.effective_price > order.price);
    }

    #[test]
    fn test_sell_projection_discounts_effective_price() {
        let base = asset(1, 6, "UM");
        let quote = asset(2, 6, "USDC");
        let intent = LimitOrderIntent {
            side: Side::Sell,
            price: dec("4.0"),
            input: dec("25"),
            base: base.clone(),
            quote: quote.clone(),
            fee_bps: 100,
        };
        let position = limit_order_position(&intent).unwrap();
        let order = order_from_position(&position, &base, &quote).unwrap();

        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.amount, dec("25"));
        // gamma = 0.99
        assert_eq!(order.effective_price, dec("3.96"));
    }

    #[test]
    fn test_rejects_foreign_pair() {
        let base = asset(1, 6, "UM");
        let quote = asset(2, 6, "USDC");
        let other = asset(7, 6, "OTHER");
        let intent = LimitOrderIntent {
            side: Side::Buy,
            price: dec("1.0"),
            input: dec("1"),
            base: base.clone(),
            quote: quote.clone(),
            fee_bps: 0,
        };
        let position = limit_order_position(&intent).unwrap();
        assert!(matches!(
            order_from_position(&position, &base, &other),
            Err(EbbError::InvalidInput { .. })
        ));
    }
}
