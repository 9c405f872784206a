//! niftyscan core: snapshot fetching, table building, derived views, reports.
//!
//! This crate holds everything except the terminal chart:
//! - Quote providers (live NSE endpoint, saved response file, in-memory)
//! - Record → DataFrame projection with required/optional column handling
//! - Day movers, 52-week range screens, 30-day momentum ranking
//! - Observer seam for pipeline diagnostics
//! - Text report writer and run configuration

pub mod analysis;
pub mod config;
pub mod data;
pub mod observer;
pub mod pipeline;
pub mod report;

pub use analysis::{MoverBar, View};
pub use config::{AnalysisConfig, AppConfig, ConfigError, SourceConfig};
pub use data::{
    DataError, JsonFileProvider, NseProvider, QuoteProvider, Record, SchemaError, Snapshot,
    StaticProvider,
};
pub use observer::{
    CollectingObserver, NullObserver, PipelineEvent, PipelineObserver, TracingObserver,
};
pub use pipeline::{analyze, run_pipeline, PipelineError};
pub use report::{write_report, write_section, MarketReport};
