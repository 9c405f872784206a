//! Quote provider trait, snapshot type, and structured error types.
//!
//! The QuoteProvider trait abstracts over where a snapshot comes from (the
//! live NSE endpoint, a saved response on disk, in-memory records) so the
//! pipeline can be exercised without network I/O.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use thiserror::Error;

/// One raw row of source data, exactly as the endpoint returned it.
pub type Record = Map<String, Value>;

/// Top-level timestamp format used by the NSE index API (`17-Oct-2026 15:30:00`).
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Structured error types for fetch operations.
///
/// All of these terminate the run; nothing is retried.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("invalid source configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
}

/// A fetched index snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Index name from the response envelope (e.g. `NIFTY 50`), if present.
    pub index_name: Option<String>,
    /// Exchange timestamp of the snapshot, if present and parseable.
    pub as_of: Option<NaiveDateTime>,
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            index_name: None,
            as_of: None,
            records,
        }
    }

    /// Parse a response body: a JSON object whose `data` key holds an array
    /// of objects.
    pub fn parse_body(body: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DataError::ResponseFormatChanged(format!("body is not JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DataError> {
        let Value::Object(mut envelope) = value else {
            return Err(DataError::ResponseFormatChanged(
                "top-level value is not an object".into(),
            ));
        };

        let data = envelope
            .remove("data")
            .ok_or_else(|| DataError::ResponseFormatChanged("missing \"data\" key".into()))?;

        let Value::Array(rows) = data else {
            return Err(DataError::ResponseFormatChanged(
                "\"data\" is not an array".into(),
            ));
        };

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| match row {
                Value::Object(record) => Ok(record),
                other => Err(DataError::ResponseFormatChanged(format!(
                    "data[{i}] is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let index_name = envelope
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let as_of = envelope
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|ts| NaiveDateTime::parse_from_str(ts, SNAPSHOT_TIMESTAMP_FORMAT).ok());

        Ok(Self {
            index_name,
            as_of,
            records,
        })
    }
}

/// Trait for snapshot sources.
pub trait QuoteProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch one snapshot of index constituents.
    fn fetch(&self) -> Result<Snapshot, DataError>;
}

/// Provider that hands out a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    snapshot: Snapshot,
}

impl StaticProvider {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            snapshot: Snapshot::from_records(records),
        }
    }
}

impl QuoteProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Snapshot, DataError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn parse_body_extracts_data_and_envelope() {
        let body = r#"{
            "name": "NIFTY 50",
            "timestamp": "17-Oct-2026 15:30:00",
            "data": [{"symbol": "TCS", "pChange": 1.2}, {"symbol": "INFY"}]
        }"#;
        let snapshot = Snapshot::parse_body(body).unwrap();

        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0]["symbol"], json!("TCS"));
        assert_eq!(snapshot.index_name.as_deref(), Some("NIFTY 50"));

        let as_of = snapshot.as_of.unwrap();
        assert_eq!(as_of.year(), 2026);
        assert_eq!(as_of.month(), 10);
        assert_eq!(as_of.hour(), 15);
    }

    #[test]
    fn unparseable_timestamp_is_ignored() {
        let snapshot =
            Snapshot::parse_body(r#"{"timestamp": "yesterday-ish", "data": []}"#).unwrap();
        assert!(snapshot.as_of.is_none());
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn parse_body_rejects_non_json() {
        let err = Snapshot::parse_body("<html>Access Denied</html>").unwrap_err();
        assert!(matches!(err, DataError::ResponseFormatChanged(_)));
    }

    #[test]
    fn parse_body_rejects_missing_data_key() {
        let err = Snapshot::parse_body(r#"{"name": "NIFTY 50"}"#).unwrap_err();
        assert!(err.to_string().contains("missing \"data\""));
    }

    #[test]
    fn parse_body_rejects_non_array_data() {
        let err = Snapshot::parse_body(r#"{"data": {"symbol": "TCS"}}"#).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn parse_body_rejects_non_object_rows() {
        let err = Snapshot::parse_body(r#"{"data": [{"symbol": "TCS"}, 42]}"#).unwrap_err();
        assert!(err.to_string().contains("data[1]"));
    }

    #[test]
    fn static_provider_returns_its_records() {
        let record = json!({"symbol": "TCS"}).as_object().unwrap().clone();
        let provider = StaticProvider::new(vec![record]);
        assert_eq!(provider.name(), "static");
        assert_eq!(provider.fetch().unwrap().records.len(), 1);
    }
}
