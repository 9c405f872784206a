//! Record → DataFrame projection.
//!
//! Builds a column-oriented quote table from raw records: the column set is
//! the union of keys across all records, projected onto the quote schema.
//! Row order is preserved. Values are coerced to the column's type; anything
//! that does not coerce becomes null.

use super::provider::Record;
use super::schema::{QuoteSchema, SchemaError};
use polars::prelude::*;
use serde_json::Value;

/// Union of keys across `records`, in first-seen order.
pub fn source_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Build the quote table.
///
/// Fails with [`SchemaError::MissingColumn`] when a required column appears
/// in none of the records. Optional columns are kept only when at least one
/// record carries them.
pub fn build_table(records: &[Record]) -> Result<DataFrame, SchemaError> {
    let present = source_columns(records);
    let present: Vec<&str> = present.iter().map(String::as_str).collect();
    let selected = QuoteSchema::select(&present)?;

    let columns = selected
        .into_iter()
        .map(|name| build_column(name, records))
        .collect();

    let df = DataFrame::new(columns)?;
    QuoteSchema::validate(&df)?;
    Ok(df)
}

fn build_column(name: &str, records: &[Record]) -> Column {
    match QuoteSchema::dtype(name) {
        DataType::String => {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|r| r.get(name).and_then(as_text))
                .collect();
            Column::new(name.into(), values)
        }
        _ => {
            let values: Vec<Option<f64>> = records
                .iter()
                .map(|r| r.get(name).and_then(as_number))
                .collect();
            Column::new(name.into(), values)
        }
    }
}

/// Numbers pass through; strings are parsed after dropping thousands
/// separators (`"1,234.50"`).
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',').collect();
            cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    fn full_record(symbol: &str, p_change: f64) -> Record {
        record(json!({
            "symbol": symbol,
            "lastPrice": 100.0,
            "dayHigh": 105.0,
            "dayLow": 95.0,
            "previousClose": 99.0,
            "change": 1.0,
            "pChange": p_change,
            "series": "EQ",
        }))
    }

    #[test]
    fn source_columns_is_union_without_duplicates() {
        let records = vec![
            record(json!({"symbol": "A", "pChange": 1.0})),
            record(json!({"symbol": "B", "yearHigh": 2.0})),
        ];
        assert_eq!(source_columns(&records), vec!["symbol", "pChange", "yearHigh"]);
    }

    #[test]
    fn source_columns_keep_source_key_order() {
        let records = vec![record(json!({
            "symbol": "A", "priority": 0, "open": 1.0, "lastPrice": 2.0, "change": 0.5
        }))];
        assert_eq!(
            source_columns(&records),
            vec!["symbol", "priority", "open", "lastPrice", "change"]
        );
    }

    #[test]
    fn required_only_source_yields_required_columns() {
        let df = build_table(&[full_record("A", 1.0), full_record("B", -1.0)]).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, QuoteSchema::REQUIRED.to_vec());
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn optional_column_on_some_rows_is_kept_with_nulls() {
        let mut with_high = full_record("A", 1.0);
        with_high.insert("yearHigh".into(), json!(250.0));
        let df = build_table(&[with_high, full_record("B", 2.0)]).unwrap();

        let year_high = df.column("yearHigh").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(year_high.get(0), Some(250.0));
        assert_eq!(year_high.get(1), None);
        assert!(df.column("yearLow").is_err());
    }

    #[test]
    fn missing_required_column_fails() {
        let mut broken = full_record("A", 1.0);
        broken.remove("dayLow");
        let err = build_table(&[broken]).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(ref c) if c == "dayLow"));
    }

    #[test]
    fn no_records_fails_on_first_required_column() {
        let err = build_table(&[]).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(ref c) if c == "symbol"));
    }

    #[test]
    fn row_order_is_preserved() {
        let df = build_table(&[full_record("Z", 1.0), full_record("A", 2.0)]).unwrap();
        let symbols: Vec<Option<&str>> = df
            .column("symbol")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(symbols, vec![Some("Z"), Some("A")]);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        assert_eq!(as_number(&json!("1,234.50")), Some(1234.5));
        assert_eq!(as_number(&json!(" -3.2 ")), Some(-3.2));
        assert_eq!(as_number(&json!("-")), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!(7)), Some(7.0));
    }

    #[test]
    fn numeric_symbol_is_stringified() {
        assert_eq!(as_text(&json!(500325)), Some("500325".to_string()));
        assert_eq!(as_text(&json!({"x": 1})), None);
    }
}
