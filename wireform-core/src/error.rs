/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Error types for the WireForm rendering engine.
//!
//! This module provides a unified error type using `thiserror` for typed,
//! domain-specific errors across all WireForm operations. Every error is a
//! caller-input problem detected at the call site: errors propagate
//! immediately, are never retried, and produce no partial output.

use thiserror::Error;

/// Result type alias using [`FormatError`] as the error type.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Top-level error type for all WireForm operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Decimal places outside the supported range at formatter construction.
    #[error("decimal places out of range: {places} (supported range 0..=3)")]
    InvalidDecimalPlaces {
        /// The rejected decimal-place count.
        places: u32,
    },

    /// A message schema was built from an empty token list.
    #[error("message schema requires at least one token")]
    EmptyTokens,

    /// A column layout was built from an empty field order.
    #[error("column field order cannot be empty")]
    EmptyFieldOrder,

    /// A column layout was built from an empty width map.
    #[error("column width map cannot be empty")]
    EmptyWidthMap,

    /// A column layout declared a zero width for a field.
    #[error("column width for field '{field}' must be positive")]
    ZeroColumnWidth {
        /// The field with the zero width.
        field: String,
    },

    /// A registry operation was given an empty or whitespace client id.
    #[error("client id cannot be empty or blank")]
    BlankClientId,

    /// A file export was given an empty or whitespace path.
    #[error("file path cannot be empty or blank")]
    BlankPath,

    /// No schema is registered for the requested client.
    #[error("no message schema registered for client '{client_id}'")]
    SchemaNotFound {
        /// The client id with no registered schema.
        client_id: String,
    },

    /// I/O error from the file-export layer.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_decimal_places_display() {
        let err = FormatError::InvalidDecimalPlaces { places: 4 };
        assert_eq!(
            err.to_string(),
            "decimal places out of range: 4 (supported range 0..=3)"
        );
    }

    #[test]
    fn test_schema_not_found_display() {
        let err = FormatError::SchemaNotFound {
            client_id: "client-a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no message schema registered for client 'client-a'"
        );
    }

    #[test]
    fn test_zero_column_width_display() {
        let err = FormatError::ZeroColumnWidth {
            field: "Weight".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column width for field 'Weight' must be positive"
        );
    }

    #[test]
    fn test_format_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FormatError = io_err.into();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
