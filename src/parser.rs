//! CSV ingestion of brand ratings.
//!
//! Each source is read in isolation: a bad row or an unreadable file turns
//! into a [`Diagnostic`] and never aborts the run.

use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::diagnostics::{Diagnostic, Field, SourceError};
use crate::stats::RatingTotals;

/// Column holding the brand name.
pub const BRAND_COLUMN: &str = "brand";
/// Column holding the numeric rating.
pub const RATING_COLUMN: &str = "rating";

/// Positions of the required columns in a source's header.
///
/// When a name repeats, the last column with that name is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub brand: usize,
    pub rating: usize,
}

impl ColumnIndex {
    pub fn from_headers(headers: &csv::StringRecord) -> Option<Self> {
        Some(Self {
            brand: (0..headers.len()).rev().find(|&i| &headers[i] == BRAND_COLUMN)?,
            rating: (0..headers.len()).rev().find(|&i| &headers[i] == RATING_COLUMN)?,
        })
    }
}

/// The fields of one input row this tool cares about. Extra columns are
/// ignored; columns absent from a short row are `None`.
#[derive(Debug)]
pub struct RatingRecord<'r> {
    pub brand: Option<&'r str>,
    pub rating: Option<&'r str>,
}

impl<'r> RatingRecord<'r> {
    pub fn project(record: &'r csv::StringRecord, columns: ColumnIndex) -> Self {
        Self {
            brand: record.get(columns.brand),
            rating: record.get(columns.rating),
        }
    }
}

/// Outcome of reading one source.
#[derive(Debug, Default)]
pub struct SourceSummary {
    pub rows_accepted: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads ratings from the CSV file at `path` into `totals`.
pub fn read_ratings_from_file(path: &str, totals: &mut RatingTotals) -> SourceSummary {
    match File::open(path) {
        Ok(file) => read_ratings(path, file, totals),
        Err(e) => SourceSummary {
            rows_accepted: 0,
            diagnostics: vec![Diagnostic::from_source_error(path, e.into())],
        },
    }
}

/// Reads ratings from any reader; `path` is only used to label diagnostics.
#[tracing::instrument(skip(reader, totals))]
pub fn read_ratings<R: Read>(path: &str, reader: R, totals: &mut RatingTotals) -> SourceSummary {
    let mut summary = SourceSummary::default();
    if let Err(e) = fold_records(path, reader, totals, &mut summary) {
        summary
            .diagnostics
            .push(Diagnostic::from_source_error(path, e));
    }
    debug!(
        rows_accepted = summary.rows_accepted,
        skipped = summary.diagnostics.len(),
        "Source processed"
    );
    summary
}

fn fold_records<R: Read>(
    path: &str,
    reader: R,
    totals: &mut RatingTotals,
    summary: &mut SourceSummary,
) -> Result<(), SourceError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let Some(columns) = ColumnIndex::from_headers(rdr.headers()?) else {
        summary.diagnostics.push(Diagnostic::MissingColumns {
            path: path.to_string(),
        });
        return Ok(());
    };

    let mut record = csv::StringRecord::new();
    // Row 1 is the header.
    for row in 2u64.. {
        if !rdr.read_record(&mut record)? {
            break;
        }
        let fields = RatingRecord::project(&record, columns);
        match check_record(path, row, &fields) {
            Ok((brand, rating)) => {
                if totals.record(brand, rating) {
                    summary.rows_accepted += 1;
                } else {
                    summary.diagnostics.push(Diagnostic::RatingOverflow {
                        path: path.to_string(),
                        row,
                        raw: fields.rating.unwrap_or_default().to_string(),
                    });
                }
            }
            Err(d) => summary.diagnostics.push(d),
        }
    }

    Ok(())
}

/// Validates one row, returning the trimmed brand and parsed rating.
fn check_record<'r>(
    path: &str,
    row: u64,
    record: &RatingRecord<'r>,
) -> Result<(&'r str, f64), Diagnostic> {
    let brand = non_blank(record.brand).ok_or_else(|| Diagnostic::EmptyField {
        path: path.to_string(),
        row,
        field: Field::Brand,
    })?;
    let raw = non_blank(record.rating).ok_or_else(|| Diagnostic::EmptyField {
        path: path.to_string(),
        row,
        field: Field::Rating,
    })?;
    let rating = parse_rating(raw).ok_or_else(|| Diagnostic::InvalidRating {
        path: path.to_string(),
        row,
        raw: record.rating.unwrap_or_default().to_string(),
    })?;
    Ok((brand, rating))
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a rating; `nan` and infinities are rejected.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
