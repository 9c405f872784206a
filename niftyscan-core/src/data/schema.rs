use polars::prelude::*;

/// Source field names, exactly as the index API spells them.
pub mod field {
    pub const SYMBOL: &str = "symbol";
    pub const LAST_PRICE: &str = "lastPrice";
    pub const DAY_HIGH: &str = "dayHigh";
    pub const DAY_LOW: &str = "dayLow";
    pub const PREVIOUS_CLOSE: &str = "previousClose";
    pub const CHANGE: &str = "change";
    pub const P_CHANGE: &str = "pChange";
    pub const YEAR_HIGH: &str = "yearHigh";
    pub const YEAR_LOW: &str = "yearLow";
    pub const PER_CHANGE_30D: &str = "perChange30d";
}

/// Column set of a quote table.
pub struct QuoteSchema;

impl QuoteSchema {
    /// Columns every snapshot must carry, in table order.
    pub const REQUIRED: [&'static str; 7] = [
        field::SYMBOL,
        field::LAST_PRICE,
        field::DAY_HIGH,
        field::DAY_LOW,
        field::PREVIOUS_CLOSE,
        field::CHANGE,
        field::P_CHANGE,
    ];

    /// Columns kept only when the source provides them, in table order.
    pub const OPTIONAL: [&'static str; 3] =
        [field::YEAR_HIGH, field::YEAR_LOW, field::PER_CHANGE_30D];

    /// Data type a column is stored as.
    pub fn dtype(name: &str) -> DataType {
        if name == field::SYMBOL {
            DataType::String
        } else {
            DataType::Float64
        }
    }

    /// Projection for a source offering `present`: every required column
    /// (erroring on the first one absent) plus the optional ones offered.
    pub fn select(present: &[&str]) -> Result<Vec<&'static str>, SchemaError> {
        let mut selected = Vec::with_capacity(Self::REQUIRED.len() + Self::OPTIONAL.len());
        for name in Self::REQUIRED {
            if !present.contains(&name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
            selected.push(name);
        }
        selected.extend(Self::OPTIONAL.into_iter().filter(|name| present.contains(name)));
        Ok(selected)
    }

    /// Validate a built table: required columns present with the expected types.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let actual = df.schema();

        for name in Self::REQUIRED {
            if !actual.contains(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }

        for name in Self::REQUIRED.iter().chain(Self::OPTIONAL.iter()) {
            let Some(actual_dtype) = actual.get(name) else {
                continue;
            };
            let expected = Self::dtype(name);
            if *actual_dtype != expected {
                return Err(SchemaError::TypeMismatch {
                    column: name.to_string(),
                    expected,
                    actual: actual_dtype.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Type mismatch in column {column}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },

    #[error("Failed to assemble table: {0}")]
    Build(#[from] PolarsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_types() {
        assert_eq!(QuoteSchema::REQUIRED.len() + QuoteSchema::OPTIONAL.len(), 10);
        assert_eq!(QuoteSchema::dtype("symbol"), DataType::String);
        assert_eq!(QuoteSchema::dtype("pChange"), DataType::Float64);
        assert_eq!(QuoteSchema::dtype("perChange30d"), DataType::Float64);
    }

    #[test]
    fn test_select_keeps_required_then_present_optional() {
        let present = [
            "yearLow", "symbol", "lastPrice", "dayHigh", "dayLow", "previousClose", "change",
            "pChange", "series",
        ];
        let selected = QuoteSchema::select(&present).unwrap();
        assert_eq!(
            selected,
            vec![
                "symbol",
                "lastPrice",
                "dayHigh",
                "dayLow",
                "previousClose",
                "change",
                "pChange",
                "yearLow"
            ]
        );
    }

    #[test]
    fn test_select_rejects_missing_required() {
        let present = ["symbol", "lastPrice", "dayHigh", "dayLow", "change", "pChange"];
        let err = QuoteSchema::select(&present).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(ref c) if c == "previousClose"));
    }

    #[test]
    fn test_validate_accepts_valid_dataframe() {
        let df = df!(
            "symbol" => ["TCS"],
            "lastPrice" => [3500.0],
            "dayHigh" => [3550.0],
            "dayLow" => [3480.0],
            "previousClose" => [3490.0],
            "change" => [10.0],
            "pChange" => [0.29]
        )
        .unwrap();
        assert!(QuoteSchema::validate(&df).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_column() {
        let df = df!("symbol" => ["TCS"], "lastPrice" => [3500.0]).unwrap();
        assert!(matches!(
            QuoteSchema::validate(&df).unwrap_err(),
            SchemaError::MissingColumn(_)
        ));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let df = df!(
            "symbol" => ["TCS"],
            "lastPrice" => ["3,500.00"],
            "dayHigh" => [3550.0],
            "dayLow" => [3480.0],
            "previousClose" => [3490.0],
            "change" => [10.0],
            "pChange" => [0.29]
        )
        .unwrap();
        assert!(matches!(
            QuoteSchema::validate(&df).unwrap_err(),
            SchemaError::TypeMismatch { .. }
        ));
    }
}
