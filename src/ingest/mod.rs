//! CSV ingestion for task exports
//!
//! Reads a CSV export with a header row, locates the `created_at` and
//! `updated_at` columns by name, parses both timestamps on every data row,
//! and derives the processing duration of each task in minutes. Row order is
//! preserved; it drives the X axis of the rendered chart.
//!
//! Any problem — missing file, absent column, malformed row, unparsable
//! timestamp — aborts the whole read with an error that carries the row
//! number and offending value. Negative durations (a task updated before it
//! was created) are kept in the series but logged as data-quality warnings.

mod reader;

pub use reader::{TaskRecord, read_durations, read_records};
