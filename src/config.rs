//! Report selection.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// The reports this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Average rating per brand.
    AverageRating,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::AverageRating => "average-rating",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average-rating" => Ok(ReportKind::AverageRating),
            other => Err(ReportError::UnsupportedReport(other.to_string())),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_average_rating() {
        assert_eq!(
            "average-rating".parse::<ReportKind>(),
            Ok(ReportKind::AverageRating)
        );
    }

    #[test]
    fn test_parse_unknown_report() {
        let err = "median-price".parse::<ReportKind>().unwrap_err();
        assert_eq!(err, ReportError::UnsupportedReport("median-price".into()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Average-Rating".parse::<ReportKind>().is_err());
        assert!(" average-rating".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_name() {
        assert_eq!(ReportKind::AverageRating.to_string(), "average-rating");
    }
}
