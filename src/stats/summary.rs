use crate::Result;
use ohno::bail;

/// Summary statistics over the trimmed duration series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of the trimmed series, in minutes
    pub average: f64,
    /// Median of the trimmed series, in minutes
    pub median: f64,
    /// Number of records in the full series
    pub total_count: usize,
    /// Number of records left after trimming
    pub trimmed_count: usize,
    /// Number of values dropped from each end
    pub trim_count: usize,
}

impl Summary {
    /// Compute trimmed average and median over a duration series
    ///
    /// # Errors
    ///
    /// Returns an error if the series is too small to survive trimming
    pub fn compute(series: &[f64], trim_count: usize) -> Result<Self> {
        let kept = trimmed(series, trim_count)?;

        Ok(Self {
            average: mean(&kept),
            median: median(&kept),
            total_count: series.len(),
            trimmed_count: kept.len(),
            trim_count,
        })
    }
}

/// Sort the series ascending and drop `trim_count` values from each end
///
/// # Errors
///
/// Returns an error if fewer than `2 * trim_count + 1` values are present,
/// so the trimmed series is never empty
pub fn trimmed(series: &[f64], trim_count: usize) -> Result<Vec<f64>> {
    let required = 2 * trim_count + 1;
    if series.len() < required {
        bail!(
            "need at least {required} records to drop the {trim_count} highest and {trim_count} lowest values, but only {} were read",
            series.len()
        );
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted[trim_count..sorted.len() - trim_count].to_vec())
}

fn mean(values: &[f64]) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "Series lengths are far below 2^52")]
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}

/// Midpoint of a sorted slice; the average of the two middle values when
/// the length is even
fn median(sorted: &[f64]) -> f64 {
    let count = sorted.len();
    if count % 2 == 0 {
        f64::midpoint(sorted[count / 2 - 1], sorted[count / 2])
    } else {
        sorted[count / 2]
    }
}
