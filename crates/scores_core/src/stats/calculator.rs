//! Six-value aggregate over exam scores.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Aggregate summary of one score sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    pub count: usize,
    pub max: u32,
    pub min: u32,
    pub mean: f64,
    pub stddev: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// No scores were supplied.
    EmptyInput,
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot compute statistics over zero scores"),
        }
    }
}

impl Error for StatsError {}

/// Computes count, max, min, mean, population stddev and population variance.
///
/// # Errors
/// - `StatsError::EmptyInput` when `scores` is empty.
pub fn calculate_stats(scores: &[u32]) -> Result<StatsResult, StatsError> {
    let (&first, rest) = scores.split_first().ok_or(StatsError::EmptyInput)?;

    let (min, max, sum) = rest.iter().fold(
        (first, first, u64::from(first)),
        |(min, max, sum), &score| (min.min(score), max.max(score), sum + u64::from(score)),
    );

    let count = scores.len();
    let mean = sum as f64 / count as f64;
    let variance = scores
        .iter()
        .map(|&score| {
            let deviation = f64::from(score) - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count as f64;

    Ok(StatsResult {
        count,
        max,
        min,
        mean,
        stddev: variance.sqrt(),
        variance,
    })
}
