//! Fetch → build → analyze.
//!
//! Each stage hands an immutable value to the next; nothing here touches
//! stdout or the terminal, so the whole pipeline runs under test with a
//! [`StaticProvider`](crate::data::StaticProvider).

use crate::analysis::{
    above_year_low, below_year_high, gainers_losers, symbols, top_thirty_day_returns,
};
use crate::config::AnalysisConfig;
use crate::data::{build_table, source_columns, DataError, QuoteProvider, SchemaError};
use crate::observer::PipelineObserver;
use crate::report::MarketReport;
use polars::prelude::*;
use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed")]
    Fetch(#[from] DataError),

    #[error("table build failed")]
    Schema(#[from] SchemaError),

    #[error("analysis failed")]
    Analysis(#[from] PolarsError),
}

/// Run the whole pipeline once.
pub fn run_pipeline(
    provider: &dyn QuoteProvider,
    config: &AnalysisConfig,
    observer: &dyn PipelineObserver,
) -> Result<MarketReport, PipelineError> {
    let snapshot = provider.fetch()?;
    observer.on_snapshot(provider.name(), &snapshot);

    observer.on_columns(&source_columns(&snapshot.records));
    let table = build_table(&snapshot.records)?;

    Ok(analyze(table, config, observer)?)
}

/// Derive all five views from a built table.
pub fn analyze(
    table: DataFrame,
    config: &AnalysisConfig,
    observer: &dyn PipelineObserver,
) -> PolarsResult<MarketReport> {
    let n = config.top_n;
    let (gainers, losers) = gainers_losers(&table, n)?;
    let below = below_year_high(&table, config.high_discount, n, observer)?;
    let above = above_year_low(&table, config.low_premium, n, observer)?;
    let thirty_day = top_thirty_day_returns(&table, n, observer)?;

    tracing::debug!(
        rows = table.height(),
        gainers = ?symbols(&gainers)?,
        losers = ?symbols(&losers)?,
        "analysis complete"
    );

    Ok(MarketReport {
        table,
        gainers,
        losers,
        below_year_high: below,
        above_year_low: above,
        thirty_day_returns: thirty_day,
    })
}
