use crate::analyzers::types::ReportRow;
use crate::stats::RatingTotals;
use std::cmp::Ordering;

/// Collapses [`RatingTotals`] into one [`ReportRow`] per brand.
///
/// Brands without any recorded rating are left out. Rows are ordered by
/// average descending, then by brand name compared case-insensitively.
/// The sort is stable, so brands equal under both keys keep the order in
/// which they were first seen.
pub fn aggregate_ratings(totals: &RatingTotals) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = totals
        .iter()
        .filter_map(|(brand, stats)| {
            stats.average().map(|average| ReportRow {
                brand: brand.to_string(),
                average,
            })
        })
        .collect();

    rows.sort_by(compare_rows);
    rows
}

fn compare_rows(a: &ReportRow, b: &ReportRow) -> Ordering {
    b.average
        .total_cmp(&a.average)
        .then_with(|| a.brand.to_lowercase().cmp(&b.brand.to_lowercase()))
}
