//! Trimmed summary statistics over a duration series
//!
//! The average and median are computed over a trimmed copy of the series:
//! sorted ascending with a fixed number of values dropped from each end to
//! reduce the influence of outliers. The untrimmed series keeps its input
//! order and is what the chart draws; only the printed and annotated
//! statistics use the trimmed copy.

mod summary;

pub use summary::{Summary, trimmed};
