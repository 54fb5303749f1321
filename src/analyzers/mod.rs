//! Rating aggregation and report assembly.
//!
//! This module turns the per-brand totals collected from every input file
//! into averaged, sorted report rows.

pub mod aggregate;
pub mod analyzer;
pub mod types;
