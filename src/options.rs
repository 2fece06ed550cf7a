//! Benchmark options and their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WARMUP_TIME_MS: f64 = 3_000.0;
pub const DEFAULT_TEST_TIME_MS: f64 = 10_000.0;
pub const DEFAULT_SAMPLES: u64 = 100;

/// Fully resolved options for one benchmark run.
///
/// Times are in milliseconds. A run without a `name` is measured and
/// returned but not recorded in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchOptions {
    pub warmup_time: f64,
    pub test_time: f64,
    pub samples: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub quiet: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            warmup_time: DEFAULT_WARMUP_TIME_MS,
            test_time: DEFAULT_TEST_TIME_MS,
            samples: DEFAULT_SAMPLES,
            name: None,
            quiet: false,
        }
    }
}

/// Caller-supplied options; unset fields fall back to [`BenchOptions::default`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialOptions {
    pub warmup_time: Option<f64>,
    pub test_time: Option<f64>,
    pub samples: Option<u64>,
    pub name: Option<String>,
    pub quiet: Option<bool>,
}

impl PartialOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn warmup_time(mut self, ms: f64) -> Self {
        self.warmup_time = Some(ms);
        self
    }

    pub fn test_time(mut self, ms: f64) -> Self {
        self.test_time = Some(ms);
        self
    }

    pub fn samples(mut self, samples: u64) -> Self {
        self.samples = Some(samples);
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    /// Overlays the set fields onto `base`.
    pub fn resolve_onto(self, base: BenchOptions) -> BenchOptions {
        BenchOptions {
            warmup_time: self.warmup_time.unwrap_or(base.warmup_time),
            test_time: self.test_time.unwrap_or(base.test_time),
            samples: self.samples.unwrap_or(base.samples),
            name: self.name.or(base.name),
            quiet: self.quiet.unwrap_or(base.quiet),
        }
    }

    pub fn resolve(self) -> BenchOptions {
        self.resolve_onto(BenchOptions::default())
    }
}

impl From<&str> for PartialOptions {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for PartialOptions {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<BenchOptions> for PartialOptions {
    fn from(o: BenchOptions) -> Self {
        Self {
            warmup_time: Some(o.warmup_time),
            test_time: Some(o.test_time),
            samples: Some(o.samples),
            name: o.name,
            quiet: Some(o.quiet),
        }
    }
}

/// Option presets for the command-line runner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// Short budgets for smoke runs.
    Quick,
    /// The library defaults.
    #[default]
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }

    pub fn options(&self) -> BenchOptions {
        match self {
            Profile::Quick => BenchOptions {
                warmup_time: 300.0,
                test_time: 1_000.0,
                samples: 10,
                ..Default::default()
            },
            Profile::Full => BenchOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = BenchOptions::default();
        assert_eq!(o.warmup_time, 3_000.0);
        assert_eq!(o.test_time, 10_000.0);
        assert_eq!(o.samples, 100);
        assert_eq!(o.name, None);
        assert!(!o.quiet);
    }

    #[test]
    fn test_bare_name_is_sugar_for_named_defaults() {
        let o = PartialOptions::from("parse").resolve();
        assert_eq!(
            o,
            BenchOptions {
                name: Some("parse".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_partial_overlay_keeps_unset_defaults() {
        let o = PartialOptions::named("x").samples(50).test_time(1.0).resolve();
        assert_eq!(o.samples, 50);
        assert_eq!(o.test_time, 1.0);
        assert_eq!(o.warmup_time, DEFAULT_WARMUP_TIME_MS);
        assert!(!o.quiet);
    }

    #[test]
    fn test_resolve_onto_profile_base() {
        let o = PartialOptions::named("x").resolve_onto(Profile::Quick.options());
        assert_eq!(o.samples, 10);
        assert_eq!(o.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_resolved_options_pass_through_unchanged() {
        let full = BenchOptions {
            warmup_time: 1.0,
            test_time: 2.0,
            samples: 3,
            name: Some("n".into()),
            quiet: true,
        };
        assert_eq!(PartialOptions::from(full.clone()).resolve(), full);
    }

    #[test]
    fn test_serialized_field_names() {
        let o = BenchOptions {
            name: Some("a".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["warmupTime"], 3000.0);
        assert_eq!(v["testTime"], 10000.0);
        assert_eq!(v["samples"], 100);
        assert_eq!(v["name"], "a");
        assert_eq!(v["quiet"], false);

        let unnamed = serde_json::to_value(BenchOptions::default()).unwrap();
        assert!(unnamed.get("name").is_none());
    }
}
