use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::options::BenchOptions;

/// Outcome of one completed benchmark run. Times are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub mean_time: f64,
    /// Per-trial times in execution order.
    pub sample_times: Vec<f64>,
    pub options: BenchOptions,
}

/// Reports keyed by benchmark name, as held in memory and on disk.
pub type ReportMap = BTreeMap<String, BenchmarkReport>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let report = BenchmarkReport {
            mean_time: 1.5,
            sample_times: vec![1.0, 2.0],
            options: BenchOptions::default(),
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["meanTime"], 1.5);
        assert_eq!(v["sampleTimes"], serde_json::json!([1.0, 2.0]));
        assert_eq!(v["options"]["samples"], 100);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let err = serde_json::from_str::<BenchmarkReport>(r#"{"meanTime": 1.0}"#);
        assert!(err.is_err());
    }
}
