//! Synthesize a range-liquidity ladder and print each rung as an order.
//!
//! Run with: `cargo run -p ebb-sdk --example ladder_usage`

use bigdecimal::BigDecimal;
use std::str::FromStr;

use ebb_sdk::{order_from_position, range_liquidity_positions, RangeLiquidityIntent, Spacing};
use ebb_types::{AssetId, AssetRef, ASSET_ID_LEN};

fn asset(first: u8, exponent: u32, symbol: &str) -> AssetRef {
    let mut bytes = [0u8; ASSET_ID_LEN];
    bytes[0] = first;
    AssetRef::new(AssetId::new(bytes), exponent, symbol)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base = asset(1, 6, "UM");
    let quote = asset(2, 6, "USDC");

    let intent = RangeLiquidityIntent {
        base: base.clone(),
        quote: quote.clone(),
        target_liquidity: BigDecimal::from_str("1000")?,
        lower_price: BigDecimal::from_str("1.0")?,
        upper_price: BigDecimal::from_str("3.0")?,
        market_price: BigDecimal::from_str("1.8")?,
        fee_bps: 30,
        positions: 10,
        spacing: Spacing::Geometric,
    };

    let rungs = range_liquidity_positions(&intent)?;
    println!("{} rungs across [1.0, 3.0]:", rungs.len());
    for rung in &rungs {
        let order = order_from_position(rung, &base, &quote)?;
        println!(
            "  {:?} {} {} @ {} (effective {})",
            order.side,
            order.amount.with_scale(6),
            match order.side {
                ebb_types::Side::Buy => &quote.symbol,
                ebb_types::Side::Sell => &base.symbol,
            },
            order.price.with_scale(6),
            order.effective_price.with_scale(6),
        );
    }
    Ok(())
}
