/// Shared position-construction path for the limit and ladder synthesizers

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use ebb_math::{coefficients_from_price, round_to_base_units};
use ebb_types::{
    AssetRef, EbbError, EbbResult, Position, PositionState, Reserves, Side, TradingFunction,
    TradingPair, NONCE_LEN,
};

/// Build one single-sided position over a base/quote market.
///
/// `price` is quote display units per base display unit; `input` is the
/// funding amount in display units of the funding asset (quote when buying,
/// base when selling). The pair is canonicalized first and the price
/// re-expressed for the asset-1 slot, since the coefficients are defined
/// relative to the canonical assignment, not the UI frame.
pub(crate) fn synthesize_position(
    base: &AssetRef,
    quote: &AssetRef,
    side: Side,
    price: &BigDecimal,
    input: &BigDecimal,
    fee_bps: u16,
    close_on_fill: bool,
) -> EbbResult<Position> {
    let (pair, base_is_asset_1) = TradingPair::new(base.clone(), quote.clone())?;

    // Price of asset 1 denominated in asset 2
    let price_of_asset_1 = if base_is_asset_1 {
        price.clone()
    } else {
        BigDecimal::one() / price
    };
    let (p, q) = coefficients_from_price(
        &price_of_asset_1,
        pair.asset_1().exponent,
        pair.asset_2().exponent,
    )?;
    let phi = TradingFunction::new(p, q, fee_bps)?;

    // A resting buy holds the quote asset, a resting sell holds the base
    let funding = match side {
        Side::Buy => quote,
        Side::Sell => base,
    };
    let funded = round_to_base_units(input, funding.exponent)?;
    if funded.is_zero() {
        return Err(EbbError::invalid_input(
            "input",
            format!(
                "{} {} rounds to zero base units",
                input, funding.symbol
            ),
        ));
    }
    let reserves = if funding.id == pair.asset_1().id {
        Reserves::from_asset_1(funded)
    } else {
        Reserves::from_asset_2(funded)
    };

    let nonce: [u8; NONCE_LEN] = rand::random();

    Ok(Position {
        pair,
        phi,
        reserves,
        nonce,
        close_on_fill,
        state: PositionState::Opened,
    })
}

/// Reject non-positive display values before any derivation work
pub(crate) fn require_positive(what: &'static str, value: &BigDecimal) -> EbbResult<()> {
    if value > &BigDecimal::zero() {
        Ok(())
    } else {
        Err(EbbError::invalid_input(
            what,
            format!("{} is not positive", value),
        ))
    }
}
