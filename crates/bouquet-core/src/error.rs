//! Error types for the bouquet

use thiserror::Error;

/// The main error type for bouquet operations
#[derive(Debug, Error)]
pub enum BouquetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl BouquetError {
    /// Shorthand for a `ValueOutOfRange` on a named config field
    pub fn out_of_range(field: &str, min: f64, max: f64, value: f64) -> Self {
        BouquetError::ValueOutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        }
    }
}

/// Result type alias for bouquet operations
pub type Result<T> = std::result::Result<T, BouquetError>;

impl From<toml::de::Error> for BouquetError {
    fn from(err: toml::de::Error) -> Self {
        BouquetError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BouquetError {
    fn from(err: toml::ser::Error) -> Self {
        BouquetError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = BouquetError::out_of_range("flowers.count", 1.0, 500.0, 0.0);
        let msg = err.to_string();
        assert!(msg.contains("flowers.count"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn toml_errors_convert() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("seed = ");
        let err: BouquetError = parsed.unwrap_err().into();
        assert!(matches!(err, BouquetError::TomlParseError(_)));
    }
}
