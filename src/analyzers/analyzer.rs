use crate::analyzers::aggregate::aggregate_ratings;
use crate::analyzers::types::Report;
use crate::error::ReportError;
use crate::parser::read_ratings_from_file;
use crate::stats::RatingTotals;
use tracing::{error, info};

/// Reads every file in order, then builds the average-rating report.
///
/// Diagnostics for skipped rows and files are logged as they are found.
/// Returns [`ReportError::NoData`] when no file contributed a valid row.
pub fn make_report<S: AsRef<str>>(files: &[S]) -> Result<Report, ReportError> {
    let mut totals = RatingTotals::new();
    let mut rows_accepted = 0;
    let mut rows_skipped = 0;

    for path in files {
        let summary = read_ratings_from_file(path.as_ref(), &mut totals);
        for d in &summary.diagnostics {
            d.emit();
        }
        rows_accepted += summary.rows_accepted;
        rows_skipped += summary.diagnostics.iter().filter(|d| d.row().is_some()).count();
    }

    let rows = aggregate_ratings(&totals);
    if rows.is_empty() {
        error!("{}", ReportError::NoData);
        return Err(ReportError::NoData);
    }

    info!(
        files = files.len(),
        brands = rows.len(),
        rows_accepted,
        rows_skipped,
        "Report ready"
    );

    Ok(Report {
        rows,
        rows_accepted,
        rows_skipped,
    })
}
