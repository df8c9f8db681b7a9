//! Derived scaling metrics
//!
//! Speedup and efficiency are plain ratios over the measured times; both
//! are computed transiently per chart, never stored back into the dataset.

use crate::dataset::{Dataset, Implementation};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while deriving metrics
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A measured or baseline time was zero or negative, so the ratio is
    /// undefined
    #[error("cannot compute speedup from non-positive time {0}")]
    NonPositiveTime(f64),

    /// Efficiency divides by the thread count
    #[error("cannot compute efficiency for a thread count of zero")]
    ZeroThreads,
}

/// Speedup of a run against the sequential baseline for the same graph
pub fn speedup(baseline_time: f64, time: f64) -> Result<f64, MetricsError> {
    if baseline_time <= 0.0 {
        return Err(MetricsError::NonPositiveTime(baseline_time));
    }
    if time <= 0.0 {
        return Err(MetricsError::NonPositiveTime(time));
    }
    Ok(baseline_time / time)
}

/// Efficiency: how close the speedup comes to ideal linear scaling
pub fn efficiency(speedup: f64, threads: u32) -> Result<f64, MetricsError> {
    if threads == 0 {
        return Err(MetricsError::ZeroThreads);
    }
    Ok(speedup / f64::from(threads))
}

/// One derived point on a thread-scaling curve
#[derive(Debug, Clone, Serialize)]
pub struct ScalingPoint {
    pub threads: u32,
    pub time: f64,
    pub speedup: f64,
    pub efficiency: f64,
}

/// Derive the scaling curve for one (graph, implementation) pair
///
/// Points come back sorted by ascending thread count; an empty vector means
/// the variant has no rows for this graph.
pub fn scaling_series(
    dataset: &Dataset,
    graph: &str,
    implementation: Implementation,
    baseline_time: f64,
) -> Result<Vec<ScalingPoint>, MetricsError> {
    dataset
        .select(graph, implementation)
        .into_iter()
        .map(|record| {
            let speedup = speedup(baseline_time, record.time)?;
            let efficiency = efficiency(speedup, record.threads)?;
            Ok(ScalingPoint {
                threads: record.threads,
                time: record.time,
                speedup,
                efficiency,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Measurement;

    fn measurement(graph: &str, implementation: Implementation, threads: u32, time: f64) -> Measurement {
        Measurement {
            graph: graph.to_string(),
            vertices: 1000,
            edges: 5000,
            components: 3,
            implementation,
            threads,
            time,
            iterations: 10,
        }
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(10.0, 5.0).unwrap(), 2.0);
        assert_eq!(speedup(10.0, 2.5).unwrap(), 4.0);
    }

    #[test]
    fn test_sequential_speedup_is_one() {
        // The baseline measured against itself.
        assert_eq!(speedup(10.0, 10.0).unwrap(), 1.0);
    }

    #[test]
    fn test_speedup_rejects_non_positive_times() {
        assert!(matches!(
            speedup(0.0, 5.0),
            Err(MetricsError::NonPositiveTime(_))
        ));
        assert!(matches!(
            speedup(10.0, 0.0),
            Err(MetricsError::NonPositiveTime(_))
        ));
        assert!(matches!(
            speedup(10.0, -1.0),
            Err(MetricsError::NonPositiveTime(_))
        ));
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(efficiency(2.0, 2).unwrap(), 1.0);
        assert_eq!(efficiency(3.0, 4).unwrap(), 0.75);
    }

    #[test]
    fn test_efficiency_rejects_zero_threads() {
        assert!(matches!(efficiency(2.0, 0), Err(MetricsError::ZeroThreads)));
    }

    #[test]
    fn test_efficiency_never_exceeds_speedup() {
        for threads in 1..=64 {
            let s = 12.5;
            let e = efficiency(s, threads).unwrap();
            assert!(e <= s);
        }
    }

    #[test]
    fn test_efficiency_is_one_exactly_at_linear_scaling() {
        let e = efficiency(8.0, 8).unwrap();
        assert_eq!(e, 1.0);
    }

    #[test]
    fn test_scaling_series() {
        let dataset = Dataset::from_records(vec![
            measurement("g1", Implementation::Sequential, 1, 10.0),
            measurement("g1", Implementation::OpenMp, 4, 2.5),
            measurement("g1", Implementation::OpenMp, 2, 5.0),
        ]);

        let baseline = dataset.baseline_time("g1").unwrap();
        let points = scaling_series(&dataset, "g1", Implementation::OpenMp, baseline).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!((points[0].threads, points[0].speedup), (2, 2.0));
        assert_eq!((points[1].threads, points[1].speedup), (4, 4.0));
        assert_eq!(points[0].efficiency, 1.0);
        assert_eq!(points[1].efficiency, 1.0);
    }

    #[test]
    fn test_scaling_series_empty_for_absent_variant() {
        let dataset = Dataset::from_records(vec![measurement(
            "g1",
            Implementation::Sequential,
            1,
            10.0,
        )]);

        let points = scaling_series(&dataset, "g1", Implementation::OpenCilk, 10.0).unwrap();
        assert!(points.is_empty());
    }
}
