//! Data types used by the reporting pipeline.

/// Average rating for one brand.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub brand: String,
    pub average: f64,
}

impl ReportRow {
    /// Average rendered with two decimals, independent of locale.
    pub fn formatted_average(&self) -> String {
        format!("{:.2}", self.average)
    }
}

/// A finished report: sorted rows plus how much input fed them.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub rows_accepted: usize,
    pub rows_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_average_two_decimals() {
        let row = ReportRow {
            brand: "apple".into(),
            average: 4.0 + 2.0 / 3.0,
        };
        assert_eq!(row.formatted_average(), "4.67");

        let row = ReportRow {
            brand: "apple".into(),
            average: 5.0,
        };
        assert_eq!(row.formatted_average(), "5.00");
    }
}
