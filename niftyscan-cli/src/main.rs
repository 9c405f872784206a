//! niftyscan: fetch a NIFTY 50 snapshot, print five market views, chart the movers.
//!
//! With no flags the run hits the NSE endpoint with the stock headers and
//! thresholds. `--input` replays a saved response instead of the network.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use niftyscan_core::{
    run_pipeline, write_report, AppConfig, JsonFileProvider, NseProvider, QuoteProvider,
    TracingObserver,
};

/// Show every column of the wide quote table instead of eliding the middle.
const FMT_MAX_COLS: &str = "POLARS_FMT_MAX_COLS";

#[derive(Parser, Debug)]
#[command(
    name = "niftyscan",
    about = "NIFTY 50 snapshot: gainers, losers, 52-week screens, 30-day leaders"
)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the source URL.
    #[arg(long)]
    url: Option<String>,

    /// Read a saved JSON response instead of calling the endpoint.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Print the reports only; skip the chart viewer.
    #[arg(long, default_value_t = false)]
    no_chart: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    if std::env::var_os(FMT_MAX_COLS).is_none() {
        std::env::set_var(FMT_MAX_COLS, "-1");
    }

    let config = load_config(&cli)?;
    let provider = build_provider(&cli, &config)?;
    tracing::info!(provider = provider.name(), "starting run");

    let report = run_pipeline(provider.as_ref(), &config.analysis, &TracingObserver)?;

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &report).context("failed to write report")?;
    stdout.flush()?;
    drop(stdout);

    if cli.no_chart {
        return Ok(());
    }

    let (gainers, losers) = report.chart_series()?;
    niftyscan_chart::show_movers(&gainers, &losers).context("failed to open chart viewer")
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn build_provider(cli: &Cli, config: &AppConfig) -> Result<Box<dyn QuoteProvider>> {
    match &cli.input {
        Some(path) => Ok(Box::new(JsonFileProvider::new(path.clone()))),
        None => Ok(Box::new(NseProvider::new(&config.source)?)),
    }
}
