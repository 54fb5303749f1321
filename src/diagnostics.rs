//! Diagnostics for skipped rows and skipped sources.
//!
//! Diagnostics never carry data. The orchestrator collects them per source
//! and writes them to stderr through `tracing`, keeping stdout for the report.

use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// Why a source could not be read at all.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found")]
    NotFound,

    #[error("permission denied")]
    PermissionDenied,

    #[error("read error: {0}")]
    Io(std::io::Error),

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceError::PermissionDenied,
            _ => SourceError::Io(e),
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return SourceError::Decode(e.to_string());
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => io.into(),
            other => SourceError::Decode(format!("{other:?}")),
        }
    }
}

/// Which of the required columns a row was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Brand,
    Rating,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Brand => f.write_str("brand"),
            Field::Rating => f.write_str("rating"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One skipped row or skipped source.
#[derive(Debug, Error)]
pub enum Diagnostic {
    #[error("file '{path}' has no 'brand' or 'rating' column, skipping")]
    MissingColumns { path: String },

    #[error("skipped row {row} in '{path}': empty '{field}' field")]
    EmptyField {
        path: String,
        row: u64,
        field: Field,
    },

    #[error("skipped row {row} in '{path}': invalid rating '{raw}'")]
    InvalidRating { path: String, row: u64, raw: String },

    #[error("skipped row {row} in '{path}': rating '{raw}' would overflow the brand total")]
    RatingOverflow { path: String, row: u64, raw: String },

    #[error("file '{path}' not found")]
    NotFound { path: String },

    #[error("no access to file '{path}'")]
    PermissionDenied { path: String },

    #[error("failed to read file '{path}': {reason}")]
    ReadFailed { path: String, reason: String },
}

impl Diagnostic {
    /// Converts a source-level failure into the matching diagnostic.
    pub fn from_source_error(path: &str, err: SourceError) -> Self {
        let path = path.to_string();
        match err {
            SourceError::NotFound => Diagnostic::NotFound { path },
            SourceError::PermissionDenied => Diagnostic::PermissionDenied { path },
            other => Diagnostic::ReadFailed {
                path,
                reason: other.to_string(),
            },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::MissingColumns { .. }
            | Diagnostic::EmptyField { .. }
            | Diagnostic::InvalidRating { .. }
            | Diagnostic::RatingOverflow { .. } => Severity::Warning,
            Diagnostic::NotFound { .. }
            | Diagnostic::PermissionDenied { .. }
            | Diagnostic::ReadFailed { .. } => Severity::Error,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Diagnostic::MissingColumns { path }
            | Diagnostic::EmptyField { path, .. }
            | Diagnostic::InvalidRating { path, .. }
            | Diagnostic::RatingOverflow { path, .. }
            | Diagnostic::NotFound { path }
            | Diagnostic::PermissionDenied { path }
            | Diagnostic::ReadFailed { path, .. } => path,
        }
    }

    /// 1-based row number, counting the header as row 1.
    pub fn row(&self) -> Option<u64> {
        match self {
            Diagnostic::EmptyField { row, .. }
            | Diagnostic::InvalidRating { row, .. }
            | Diagnostic::RatingOverflow { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Writes the diagnostic to the log at its severity.
    pub fn emit(&self) {
        let path = self.path();
        match (self.severity(), self.row()) {
            (Severity::Warning, Some(row)) => warn!(path, row, "{}", self),
            (Severity::Warning, None) => warn!(path, "{}", self),
            (Severity::Error, _) => error!(path, "{}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let nf: SourceError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(nf, SourceError::NotFound));

        let pd: SourceError = std::io::Error::from(std::io::ErrorKind::PermissionDenied).into();
        assert!(matches!(pd, SourceError::PermissionDenied));

        let other: SourceError = std::io::Error::other("disk on fire").into();
        assert!(matches!(other, SourceError::Io(_)));
    }

    #[test]
    fn test_source_error_to_diagnostic() {
        let d = Diagnostic::from_source_error("a.csv", SourceError::NotFound);
        assert_eq!(d.to_string(), "file 'a.csv' not found");
        assert_eq!(d.severity(), Severity::Error);

        let d = Diagnostic::from_source_error(
            "b.csv",
            SourceError::Io(std::io::Error::other("boom")),
        );
        assert!(matches!(d, Diagnostic::ReadFailed { .. }));
        assert!(d.to_string().contains("boom"));
    }

    #[test]
    fn test_row_diagnostic_names_source_and_row() {
        let d = Diagnostic::InvalidRating {
            path: "products.csv".into(),
            row: 7,
            raw: "five".into(),
        };
        let msg = d.to_string();
        assert!(msg.contains("products.csv"));
        assert!(msg.contains("row 7"));
        assert!(msg.contains("'five'"));
        assert_eq!(d.row(), Some(7));
        assert_eq!(d.severity(), Severity::Warning);
    }

    #[test]
    fn test_empty_field_message() {
        let d = Diagnostic::EmptyField {
            path: "x.csv".into(),
            row: 2,
            field: Field::Brand,
        };
        assert_eq!(d.to_string(), "skipped row 2 in 'x.csv': empty 'brand' field");
    }

    #[test]
    fn test_overflow_is_a_row_warning() {
        let d = Diagnostic::RatingOverflow {
            path: "big.csv".into(),
            row: 3,
            raw: "1e308".into(),
        };
        assert_eq!(d.row(), Some(3));
        assert_eq!(d.severity(), Severity::Warning);
        assert!(d.to_string().contains("'1e308'"));
    }

    #[test]
    fn test_emit_does_not_panic() {
        Diagnostic::MissingColumns {
            path: "x.csv".into(),
        }
        .emit();
    }
}
