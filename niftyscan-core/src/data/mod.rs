//! Snapshot fetching and table construction

pub mod file;
pub mod nse;
pub mod provider;
pub mod schema;
pub mod table;

pub use file::JsonFileProvider;
pub use nse::NseProvider;
pub use provider::{DataError, QuoteProvider, Record, Snapshot, StaticProvider};
pub use schema::{field, QuoteSchema, SchemaError};
pub use table::{build_table, source_columns};
