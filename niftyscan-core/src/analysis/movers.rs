//! Day movers: the largest gainers and losers by percentage change.

use super::{extreme_rows, has_column};
use crate::data::field;
use polars::prelude::*;

/// The `n` rows with the largest `pChange`, descending. Ties keep input order.
pub fn top_gainers(table: &DataFrame, n: usize) -> PolarsResult<DataFrame> {
    extreme_rows(table.clone().lazy(), field::P_CHANGE, n, true)
}

/// The `n` rows with the smallest `pChange`, ascending. Ties keep input order.
pub fn top_losers(table: &DataFrame, n: usize) -> PolarsResult<DataFrame> {
    extreme_rows(table.clone().lazy(), field::P_CHANGE, n, false)
}

/// Gainers and losers in one call. A table with fewer than `n` rows yields
/// every row in both.
pub fn gainers_losers(table: &DataFrame, n: usize) -> PolarsResult<(DataFrame, DataFrame)> {
    Ok((top_gainers(table, n)?, top_losers(table, n)?))
}

/// One bar of the movers chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MoverBar {
    pub symbol: String,
    pub p_change: f64,
}

/// Extract `(symbol, pChange)` pairs from a derived table, in row order.
/// Rows missing either value are skipped; a table without the columns
/// yields no bars.
pub fn mover_bars(table: &DataFrame) -> PolarsResult<Vec<MoverBar>> {
    if !has_column(table, field::SYMBOL) || !has_column(table, field::P_CHANGE) {
        return Ok(Vec::new());
    }

    let symbols = table.column(field::SYMBOL)?.as_materialized_series().str()?;
    let changes = table.column(field::P_CHANGE)?.as_materialized_series().f64()?;

    Ok(symbols
        .into_iter()
        .zip(changes)
        .filter_map(|(symbol, p_change)| {
            Some(MoverBar {
                symbol: symbol?.to_string(),
                p_change: p_change?,
            })
        })
        .collect())
}
