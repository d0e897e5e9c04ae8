use crate::Result;
use camino::Utf8Path;
use chrono::NaiveDateTime;
use ohno::{IntoAppError, bail};

const LOG_TARGET: &str = "ingest";

const CREATED_COLUMN: &str = "created_at";
const UPDATED_COLUMN: &str = "updated_at";

/// One row of the task export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRecord {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TaskRecord {
    /// Elapsed time between creation and last update, in minutes.
    ///
    /// Negative when `updated_at` precedes `created_at`; callers decide
    /// whether that is worth flagging.
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.updated_at.signed_duration_since(self.created_at).as_seconds_f64() / 60.0
    }
}

/// Read all task records from a CSV export
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a required column is
/// missing, or any timestamp fails to parse against `timestamp_format`
pub fn read_records(path: &Utf8Path, timestamp_format: &str) -> Result<Vec<TaskRecord>> {
    let mut reader = csv::Reader::from_path(path).into_app_err_with(|| format!("unable to open task export '{path}'"))?;

    let headers = reader.headers().into_app_err_with(|| format!("reading header row of '{path}'"))?;
    let created_index = column_index(headers, CREATED_COLUMN, path)?;
    let updated_index = column_index(headers, UPDATED_COLUMN, path)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let line = index + 2;
        let row = row.into_app_err_with(|| format!("reading row at line {line} of '{path}'"))?;

        records.push(TaskRecord {
            created_at: parse_timestamp(&row, created_index, CREATED_COLUMN, timestamp_format, line)?,
            updated_at: parse_timestamp(&row, updated_index, UPDATED_COLUMN, timestamp_format, line)?,
        });
    }

    log::debug!(target: LOG_TARGET, "Read {} task record(s) from '{path}'", records.len());
    Ok(records)
}

/// Read task records and reduce them to a duration series, in row order
///
/// Negative durations are preserved (they sort, trim, and average like any
/// other value) but each one is logged as a data-quality warning.
///
/// # Errors
///
/// Returns an error under the same conditions as [`read_records`]
pub fn read_durations(path: &Utf8Path, timestamp_format: &str) -> Result<Vec<f64>> {
    let records = read_records(path, timestamp_format)?;

    let mut durations = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let minutes = record.duration_minutes();
        if minutes < 0.0 {
            log::warn!(
                target: LOG_TARGET,
                "line {}: updated_at precedes created_at ({minutes:.1} min); value kept in the series",
                index + 2
            );
        }
        durations.push(minutes);
    }

    Ok(durations)
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Utf8Path) -> Result<usize> {
    let Some(index) = headers.iter().position(|h| h == name) else {
        bail!("column '{name}' not found in '{path}'");
    };
    Ok(index)
}

fn parse_timestamp(row: &csv::StringRecord, index: usize, column: &str, format: &str, line: usize) -> Result<NaiveDateTime> {
    let Some(value) = row.get(index) else {
        bail!("line {line}: row has no value for column '{column}'");
    };

    NaiveDateTime::parse_from_str(value, format)
        .into_app_err_with(|| format!("line {line}: invalid timestamp '{value}' in column '{column}' (expected format '{format}')"))
}
