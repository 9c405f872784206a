//! Derived views over a quote table.
//!
//! Every view is a pure function: quote table in, new table out, same columns
//! as the input. Views that depend on an optional column return an empty
//! table and report the gap to the observer instead of failing.

pub mod momentum;
pub mod movers;
pub mod yearly;

pub use momentum::top_thirty_day_returns;
pub use movers::{gainers_losers, mover_bars, top_gainers, top_losers, MoverBar};
pub use yearly::{above_year_low, below_year_high};

use crate::data::field;
use crate::observer::PipelineObserver;
use polars::prelude::*;

/// The five report sections, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Gainers,
    Losers,
    BelowYearHigh,
    AboveYearLow,
    ThirtyDayReturns,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Gainers,
        View::Losers,
        View::BelowYearHigh,
        View::AboveYearLow,
        View::ThirtyDayReturns,
    ];

    /// Section heading printed above the table.
    pub fn label(self) -> &'static str {
        match self {
            View::Gainers => "Top 5 Gainers",
            View::Losers => "Top 5 Losers",
            View::BelowYearHigh => "Stocks 30% below 52-week high",
            View::AboveYearLow => "Stocks 20% above 52-week low",
            View::ThirtyDayReturns => "Top 5 Stocks with Highest Returns in Last 30 Days",
        }
    }

    /// Optional column this view cannot work without, if any.
    pub fn optional_column(self) -> Option<&'static str> {
        match self {
            View::Gainers | View::Losers => None,
            View::BelowYearHigh => Some(field::YEAR_HIGH),
            View::AboveYearLow => Some(field::YEAR_LOW),
            View::ThirtyDayReturns => Some(field::PER_CHANGE_30D),
        }
    }

    /// Notice emitted when the optional column is missing.
    pub fn unavailable_notice(self) -> Option<&'static str> {
        match self {
            View::Gainers | View::Losers => None,
            View::BelowYearHigh => Some("52-week high data not available"),
            View::AboveYearLow => Some("52-week low data not available"),
            View::ThirtyDayReturns => Some("30-day return data not available"),
        }
    }
}

/// Symbols of `df` in row order; null symbols are skipped.
pub fn symbols(df: &DataFrame) -> PolarsResult<Vec<String>> {
    if !has_column(df, field::SYMBOL) {
        return Ok(Vec::new());
    }
    Ok(df
        .column(field::SYMBOL)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect())
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// True when `table` lacks the optional column `view` depends on. The gap is
/// reported to `observer`.
pub(crate) fn input_missing(
    table: &DataFrame,
    view: View,
    observer: &dyn PipelineObserver,
) -> bool {
    match view.optional_column() {
        Some(column) if !has_column(table, column) => {
            observer.on_unavailable(view, column);
            true
        }
        _ => false,
    }
}

/// The `n` rows with the largest (or smallest) `key`, nulls dropped, ties
/// kept in input order.
pub(crate) fn extreme_rows(
    lf: LazyFrame,
    key: &str,
    n: usize,
    descending: bool,
) -> PolarsResult<DataFrame> {
    let sorted = lf
        .filter(col(key).is_not_null())
        .sort(
            [key],
            SortMultipleOptions::default()
                .with_order_descending(descending)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .collect()?;
    Ok(sorted.head(Some(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_are_listed_in_print_order() {
        let labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels[0], "Top 5 Gainers");
        assert_eq!(labels[4], "Top 5 Stocks with Highest Returns in Last 30 Days");
    }

    #[test]
    fn only_yearly_and_momentum_views_need_optional_columns() {
        assert_eq!(View::Gainers.optional_column(), None);
        assert_eq!(View::BelowYearHigh.optional_column(), Some("yearHigh"));
        assert_eq!(View::AboveYearLow.optional_column(), Some("yearLow"));
        assert_eq!(View::ThirtyDayReturns.optional_column(), Some("perChange30d"));
    }

    #[test]
    fn input_missing_reports_the_views_column() {
        use crate::observer::{CollectingObserver, PipelineEvent};

        let df = df!("symbol" => ["A"], "yearLow" => [1.0]).unwrap();
        let observer = CollectingObserver::new();
        assert!(input_missing(&df, View::BelowYearHigh, &observer));
        assert!(!input_missing(&df, View::AboveYearLow, &observer));
        assert!(!input_missing(&df, View::Gainers, &observer));

        match observer.events().as_slice() {
            [PipelineEvent::Unavailable { view, column }] => {
                assert_eq!(*view, View::BelowYearHigh);
                assert_eq!(column, "yearHigh");
            }
            other => panic!("expected one unavailable event, got {other:?}"),
        }
    }

    #[test]
    fn extreme_rows_is_stable_and_skips_nulls() {
        let df = df!(
            "symbol" => ["A", "B", "C", "D"],
            "v" => [Some(1.0), None, Some(3.0), Some(1.0)]
        )
        .unwrap();

        let top = extreme_rows(df.clone().lazy(), "v", 10, true).unwrap();
        assert_eq!(symbols(&top).unwrap(), vec!["C", "A", "D"]);

        let bottom = extreme_rows(df.lazy(), "v", 2, false).unwrap();
        assert_eq!(symbols(&bottom).unwrap(), vec!["A", "D"]);
    }

    #[test]
    fn symbols_of_empty_frame_is_empty() {
        assert!(symbols(&DataFrame::empty()).unwrap().is_empty());
    }
}
