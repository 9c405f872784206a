//! Trailing 30-day performance ranking.

use super::{extreme_rows, input_missing, View};
use crate::data::field;
use crate::observer::PipelineObserver;
use polars::prelude::*;

/// The `n` rows with the largest `perChange30d`, descending. Empty (and
/// reported) when the table has no `perChange30d`.
pub fn top_thirty_day_returns(
    table: &DataFrame,
    n: usize,
    observer: &dyn PipelineObserver,
) -> PolarsResult<DataFrame> {
    if input_missing(table, View::ThirtyDayReturns, observer) {
        return Ok(DataFrame::empty());
    }
    extreme_rows(table.clone().lazy(), field::PER_CHANGE_30D, n, true)
}
