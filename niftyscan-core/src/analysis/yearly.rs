//! 52-week range screens.
//!
//! `below_year_high` finds stocks trading well under their 52-week peak,
//! `above_year_low` finds stocks trading well over their 52-week trough.
//! Both rank the survivors by the reference price itself, descending.

use super::{extreme_rows, input_missing, View};
use crate::data::field;
use crate::observer::PipelineObserver;
use polars::prelude::*;

/// Rows with `lastPrice <= discount * yearHigh`, top `n` by `yearHigh`
/// descending. Empty (and reported) when the table has no `yearHigh`.
pub fn below_year_high(
    table: &DataFrame,
    discount: f64,
    n: usize,
    observer: &dyn PipelineObserver,
) -> PolarsResult<DataFrame> {
    if input_missing(table, View::BelowYearHigh, observer) {
        return Ok(DataFrame::empty());
    }

    let selected = table
        .clone()
        .lazy()
        .filter(col(field::LAST_PRICE).lt_eq(col(field::YEAR_HIGH) * lit(discount)));
    extreme_rows(selected, field::YEAR_HIGH, n, true)
}

/// Rows with `lastPrice >= premium * yearLow`, top `n` by `yearLow`
/// descending. Empty (and reported) when the table has no `yearLow`.
pub fn above_year_low(
    table: &DataFrame,
    premium: f64,
    n: usize,
    observer: &dyn PipelineObserver,
) -> PolarsResult<DataFrame> {
    if input_missing(table, View::AboveYearLow, observer) {
        return Ok(DataFrame::empty());
    }

    let selected = table
        .clone()
        .lazy()
        .filter(col(field::LAST_PRICE).gt_eq(col(field::YEAR_LOW) * lit(premium)));
    extreme_rows(selected, field::YEAR_LOW, n, true)
}
