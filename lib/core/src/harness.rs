// Repeated-run benchmark harness with median-stabilized timing
use tracing::debug;

use crate::{Error, MstResult, Result};

pub const WARMUP_RUNS_VAR: &str = "MST_WARMUP_RUNS";
pub const MEASUREMENT_RUNS_VAR: &str = "MST_MEASUREMENT_RUNS";
pub const DEFAULT_WARMUP_RUNS: usize = 3;
pub const DEFAULT_MEASUREMENT_RUNS: usize = 7;

/// How many times each computation is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Runs executed and thrown away before measuring
    pub warmup_runs: usize,
    /// Timed runs; the reported time is their median
    pub measurement_runs: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_runs: DEFAULT_WARMUP_RUNS,
            measurement_runs: DEFAULT_MEASUREMENT_RUNS,
        }
    }
}

impl BenchmarkConfig {
    /// Read `MST_WARMUP_RUNS` and `MST_MEASUREMENT_RUNS`, keeping the
    /// defaults for anything absent or unparseable.
    pub fn from_env() -> Self {
        let warmup = std::env::var(WARMUP_RUNS_VAR).ok();
        let measurement = std::env::var(MEASUREMENT_RUNS_VAR).ok();
        Self::from_values(warmup.as_deref(), measurement.as_deref())
    }

    pub fn from_values(warmup: Option<&str>, measurement: Option<&str>) -> Self {
        Self {
            warmup_runs: parse_runs(warmup, DEFAULT_WARMUP_RUNS, 0),
            measurement_runs: parse_runs(measurement, DEFAULT_MEASUREMENT_RUNS, 1),
        }
    }

    #[inline]
    pub fn run<F>(&self, computation: F) -> Result<MstResult>
    where
        F: FnMut() -> MstResult,
    {
        run_with_stabilized_timing(computation, self.warmup_runs, self.measurement_runs)
    }
}

/// Parse a run count override. Values below `floor` are raised to it,
/// non-numeric values give `default`.
pub fn parse_runs(value: Option<&str>, default: usize, floor: usize) -> usize {
    match value.map(|v| v.trim().parse::<i64>()) {
        Some(Ok(parsed)) if parsed <= floor as i64 => floor,
        Some(Ok(parsed)) => usize::try_from(parsed).unwrap_or(default),
        _ => default,
    }
}

/// Median of the samples; sorts them in place.
pub fn median(samples: &mut [f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(|a, b| a.total_cmp(b));
    let middle = samples.len() / 2;
    if samples.len() % 2 == 0 {
        Some((samples[middle - 1] + samples[middle]) / 2.0)
    } else {
        Some(samples[middle])
    }
}

/// Run `computation` `warmup_runs` times untimed, then `measurement_runs`
/// times, and return the last measured result carrying the median of the
/// measured execution times.
pub fn run_with_stabilized_timing<F>(
    mut computation: F,
    warmup_runs: usize,
    measurement_runs: usize,
) -> Result<MstResult>
where
    F: FnMut() -> MstResult,
{
    if measurement_runs == 0 {
        return Err(Error::NoMeasurementRuns);
    }

    for _ in 0..warmup_runs {
        computation();
    }

    let mut samples = Vec::with_capacity(measurement_runs);
    let mut last = None;
    for _ in 0..measurement_runs {
        let result = computation();
        samples.push(result.execution_time_ms());
        last = Some(result);
    }

    let last = last.ok_or(Error::NoMeasurementRuns)?;
    let stabilized = median(&mut samples).ok_or(Error::NoMeasurementRuns)?;
    debug!(
        warmup_runs,
        measurement_runs,
        min_ms = samples[0],
        max_ms = samples[samples.len() - 1],
        median_ms = stabilized,
        "stabilized timing"
    );

    Ok(last.with_execution_time(stabilized))
}
