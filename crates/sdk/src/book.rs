/// Route-book aggregation over trade-simulation traces
///
/// The simulator answers "how would a large hypothetical trade fill?" with
/// a list of traces, each one path through one or more positions, ordered
/// best-first by fill-size-weighted price quality. This module folds those
/// traces into sorted, depth-accumulated, price-bucketed book rows. It is a
/// deterministic function of the trace list alone: no clock, no caching,
/// no dependence on call order beyond the documented merge-order rule.

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use ebb_math::{from_base_units, BASE_UNIT_ROUNDING};
use ebb_types::{
    AssetRef, BookRow, EbbError, EbbResult, RouteBook, Side, Trace, DEFAULT_BOOK_LIMIT,
};

// ============================================================================
// Parameters
// ============================================================================

/// Aggregation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookParams {
    /// Maximum rows kept per side
    pub limit: usize,
}

impl Default for BookParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_BOOK_LIMIT,
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Build both sides of the route book for a base/quote market.
///
/// An empty trace list yields an empty book, never an error; the
/// simulator's "no route can fill this size" answer reaches here as an
/// empty list too. Errors are reserved for structurally malformed traces.
pub fn build_book(
    base: &AssetRef,
    quote: &AssetRef,
    traces: &[Trace],
    params: &BookParams,
) -> EbbResult<RouteBook> {
    let mut buy: Vec<BookRow> = Vec::new();
    let mut sell: Vec<BookRow> = Vec::new();

    for trace in traces {
        trace.validate()?;
        let input = trace.input()?;
        let output = trace.output()?;

        // Side from the input leg; endpoints must be the market's assets
        let side = if input.asset.id == base.id && output.asset.id == quote.id {
            Side::Sell
        } else if input.asset.id == quote.id && output.asset.id == base.id {
            Side::Buy
        } else {
            return Err(EbbError::invalid_trace(format!(
                "trace endpoints {} -> {} do not match market {}/{}",
                input.asset.symbol, output.asset.symbol, base.symbol, quote.symbol
            )));
        };

        let input_display = from_base_units(&input.amount, input.asset.exponent);
        let output_display = from_base_units(&output.amount, output.asset.exponent);

        // Quote display units per base display unit
        let price = match side {
            Side::Sell => &output_display / &input_display,
            Side::Buy => &input_display / &output_display,
        };
        // Bucket at the quote asset's display precision
        let price = price.with_scale_round(quote.exponent as i64, BASE_UNIT_ROUNDING);

        let rows = match side {
            Side::Buy => &mut buy,
            Side::Sell => &mut sell,
        };
        merge_row(rows, price, input_display, trace.hop_count(), side);
    }

    finish_side(&mut buy, params.limit, Side::Buy);
    finish_side(&mut sell, params.limit, Side::Sell);

    tracing::debug!(
        traces = traces.len(),
        buy_rows = buy.len(),
        sell_rows = sell.len(),
        "aggregated route book"
    );
    Ok(RouteBook { buy, sell })
}

/// The direct-only subset: routes filled by a single position
pub fn build_direct_book(
    base: &AssetRef,
    quote: &AssetRef,
    traces: &[Trace],
    params: &BookParams,
) -> EbbResult<RouteBook> {
    let direct: Vec<Trace> = traces.iter().filter(|t| t.is_direct()).cloned().collect();
    build_book(base, quote, &direct, params)
}

/// Fold one trace into its side, preserving the simulator's best-first
/// arrival order.
///
/// Rows with an equal bucketed price merge: `total` accumulates the summed
/// input size, while `amount` keeps the minimum: the worst-case binding
/// constraint among the merged routes, a conservative display heuristic
/// rather than a protocol-derived quantity.
fn merge_row(
    rows: &mut Vec<BookRow>,
    price: BigDecimal,
    amount: BigDecimal,
    hop_count: usize,
    side: Side,
) {
    if let Some(existing) = rows.iter_mut().find(|row| row.price == price) {
        existing.total += &amount;
        if amount < existing.amount {
            existing.amount = amount;
        }
        // Report the most direct route known at this level
        existing.hop_count = existing.hop_count.min(hop_count);
    } else {
        rows.push(BookRow {
            price,
            total: amount.clone(),
            amount,
            cumulative_total: BigDecimal::zero(),
            hop_count,
            side,
        });
    }
}

/// Truncate to the row limit, order best price first, and fill running
/// depth totals
fn finish_side(rows: &mut Vec<BookRow>, limit: usize, side: Side) {
    // Arrival order is best-first, so truncation keeps the best rows
    rows.truncate(limit);
    match side {
        Side::Buy => rows.sort_by(|a, b| b.price.cmp(&a.price)),
        Side::Sell => rows.sort_by(|a, b| a.price.cmp(&b.price)),
    }
    let mut running = BigDecimal::zero();
    for row in rows.iter_mut() {
        running += &row.total;
        row.cumulative_total = running.clone();
    }
}
