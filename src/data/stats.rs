use thiserror::Error;

use super::model::{Metric, PropertyRecord};

// ---------------------------------------------------------------------------
// Position measures over a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("column '{0}' has no finite values to summarize")]
    EmptyColumn(Metric),
}

/// Median and quartiles of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

/// Percentile `p` (in `[0, 1]`) of an ascending slice, interpolating linearly
/// between the two closest ranks. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = last as f64 * p.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = rank - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Median, Q1 and Q3 of `metric` across every record given.
///
/// Callers pass the full dataset, not a filtered subset: the reference lines
/// are global. Non-finite values are skipped.
pub fn summarize(records: &[PropertyRecord], metric: Metric) -> Result<Summary, StatsError> {
    let mut values: Vec<f64> = records
        .iter()
        .map(|r| r.value(metric))
        .filter(|v| v.is_finite())
        .collect();
    values.sort_by(f64::total_cmp);

    let at = |p: f64| percentile(&values, p).ok_or(StatsError::EmptyColumn(metric));
    Ok(Summary {
        median: at(0.5)?,
        q1: at(0.25)?,
        q3: at(0.75)?,
    })
}
