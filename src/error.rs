use thiserror::Error;

/// Failures that end a run without a report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("unsupported report '{0}', only 'average-rating' is available")]
    UnsupportedReport(String),

    #[error("No data to report (no valid rows with ratings)")]
    NoData,
}

impl ReportError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::NoData => 1,
            ReportError::UnsupportedReport(_) => 2,
        }
    }
}
