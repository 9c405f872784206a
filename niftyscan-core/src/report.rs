//! Text report: the five derived tables under their headings.

use crate::analysis::{mover_bars, MoverBar, View};
use polars::prelude::*;
use std::io::{self, Write};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct MarketReport {
    /// The projected quote table every view was derived from.
    pub table: DataFrame,
    pub gainers: DataFrame,
    pub losers: DataFrame,
    pub below_year_high: DataFrame,
    pub above_year_low: DataFrame,
    pub thirty_day_returns: DataFrame,
}

impl MarketReport {
    pub fn view(&self, view: View) -> &DataFrame {
        match view {
            View::Gainers => &self.gainers,
            View::Losers => &self.losers,
            View::BelowYearHigh => &self.below_year_high,
            View::AboveYearLow => &self.above_year_low,
            View::ThirtyDayReturns => &self.thirty_day_returns,
        }
    }

    /// `(heading, table)` pairs in print order.
    pub fn sections(&self) -> Vec<(&'static str, &DataFrame)> {
        View::ALL
            .iter()
            .map(|&view| (view.label(), self.view(view)))
            .collect()
    }

    /// Chart series: gainers and losers as `(symbol, pChange)` bars.
    pub fn chart_series(&self) -> PolarsResult<(Vec<MoverBar>, Vec<MoverBar>)> {
        Ok((mover_bars(&self.gainers)?, mover_bars(&self.losers)?))
    }
}

/// Write one heading and its table.
pub fn write_section<W: Write>(out: &mut W, label: &str, table: &DataFrame) -> io::Result<()> {
    writeln!(out, "{label}:")?;
    writeln!(out, "{table}")
}

/// Write all five sections in print order.
pub fn write_report<W: Write>(out: &mut W, report: &MarketReport) -> io::Result<()> {
    for (label, table) in report.sections() {
        write_section(out, label, table)?;
    }
    Ok(())
}
