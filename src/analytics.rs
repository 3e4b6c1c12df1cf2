//! Stateless statistics over a series snapshot.
//!
//! Every function requires a non-empty snapshot and fails with
//! [`SeriesError::EmptySeries`] otherwise. None of them mutates its input.

use crate::error::SeriesError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Aggregate statistics derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub average: f64,
    pub deviation: f64,
    pub min: f64,
    pub max: f64,
}

fn check_not_empty(snapshot: &[f64]) -> Result<(), SeriesError> {
    if snapshot.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    Ok(())
}

/// Arithmetic mean.
pub fn average(snapshot: &[f64]) -> Result<f64, SeriesError> {
    check_not_empty(snapshot)?;
    Ok(snapshot.iter().sum::<f64>() / snapshot.len() as f64)
}

/// Population standard deviation: `sqrt(sum((x - mean)^2) / n)`.
pub fn deviation(snapshot: &[f64]) -> Result<f64, SeriesError> {
    let mean = average(snapshot)?;
    let var = snapshot.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / snapshot.len() as f64;
    Ok(var.sqrt())
}

/// Smallest reading.
pub fn min(snapshot: &[f64]) -> Result<f64, SeriesError> {
    check_not_empty(snapshot)?;
    Ok(snapshot.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest reading.
pub fn max(snapshot: &[f64]) -> Result<f64, SeriesError> {
    check_not_empty(snapshot)?;
    Ok(snapshot.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Reading closest to zero; an equidistant pair prefers the positive reading.
pub fn closest_to_zero(snapshot: &[f64]) -> Result<f64, SeriesError> {
    check_not_empty(snapshot)?;
    let mut best = snapshot[0];
    for &x in &snapshot[1..] {
        if x.abs() < best.abs() || (x.abs() == best.abs() && x > best) {
            best = x;
        }
    }
    Ok(best)
}

/// Reading closest to `target`.
///
/// A target of zero delegates to [`closest_to_zero`] and inherits its
/// positive tie-break; for any other target the first reading at the minimal
/// distance wins. The two tie-break rules are intentionally different.
pub fn closest_to_value(snapshot: &[f64], target: f64) -> Result<f64, SeriesError> {
    check_not_empty(snapshot)?;
    if target == 0.0 {
        return closest_to_zero(snapshot);
    }

    let mut best = snapshot[0];
    for &x in &snapshot[1..] {
        // Strict comparison keeps the earliest reading on ties.
        if (target - x).abs() < (target - best).abs() {
            best = x;
        }
    }
    Ok(best)
}

/// Readings within `[lower, upper]`, both bounds inclusive, in original order.
pub fn in_range(snapshot: &[f64], lower: f64, upper: f64) -> Result<Vec<f64>, SeriesError> {
    check_not_empty(snapshot)?;
    Ok(snapshot
        .iter()
        .copied()
        .filter(|&x| x >= lower && x <= upper)
        .collect())
}

/// Readings less than or equal to `bound`.
pub fn less_than(snapshot: &[f64], bound: f64) -> Result<Vec<f64>, SeriesError> {
    in_range(snapshot, f64::NEG_INFINITY, bound)
}

/// Readings greater than or equal to `bound`.
pub fn greater_than(snapshot: &[f64], bound: f64) -> Result<Vec<f64>, SeriesError> {
    in_range(snapshot, bound, f64::INFINITY)
}

/// Detached copy of the snapshot, sorted in non-decreasing order.
///
/// The sort is stable and the input is left untouched.
pub fn sorted(snapshot: &[f64]) -> Result<Vec<f64>, SeriesError> {
    check_not_empty(snapshot)?;
    let mut copy = snapshot.to_vec();
    copy.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(copy)
}

/// All four aggregate statistics, computed over the one given snapshot.
pub fn summary(snapshot: &[f64]) -> Result<SummaryStatistics, SeriesError> {
    Ok(SummaryStatistics {
        average: average(snapshot)?,
        deviation: deviation(snapshot)?,
        min: min(snapshot)?,
        max: max(snapshot)?,
    })
}
