//! Report registry and on-disk persistence.
//!
//! The on-disk file is a JSON object keyed by benchmark name. Saving merges
//! it with the session's reports (session entries win) and rewrites the
//! whole file. The write is a plain overwrite: concurrent writers race and
//! the last one wins.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, error};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{BenchError, Result};
use crate::report::{BenchmarkReport, ReportMap};

pub const DEFAULT_REPORT_PATH: &str = "report.json";

/// Accumulates named benchmark reports for one driver.
#[derive(Debug, Default)]
pub struct Session<C = MonotonicClock> {
    pub(crate) clock: C,
    pub(crate) reports: ReportMap,
}

impl Session {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            reports: ReportMap::new(),
        }
    }

    /// Reports recorded by named runs in this session.
    pub fn reports(&self) -> &ReportMap {
        &self.reports
    }

    pub fn report(&self, name: &str) -> Option<&BenchmarkReport> {
        self.reports.get(name)
    }

    /// Merges this session's reports into the file at `path`.
    ///
    /// A missing file counts as empty. An unreadable or malformed one is an
    /// error and the file is left untouched.
    pub fn save_reports(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let on_disk = load_reports(path).inspect_err(|e| {
            error!(path = %path.display(), "cannot merge with existing reports: {e}");
        })?;

        let merged = merge_reports(on_disk.unwrap_or_default(), &self.reports);
        let json = serde_json::to_string_pretty(&merged)?;
        fs::write(path, json).map_err(|e| BenchError::io(path, e))?;
        debug!(path = %path.display(), reports = merged.len(), "saved reports");
        Ok(())
    }
}

/// Reads a report file. `Ok(None)` means the file does not exist.
pub fn load_reports(path: impl AsRef<Path>) -> Result<Option<ReportMap>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(BenchError::io(path, e)),
    };
    serde_json::from_str::<ReportMap>(&text)
        .map(Some)
        .map_err(|source| BenchError::PersistedStateCorrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Union of `base` and `overrides`; entries in `overrides` win on collision.
pub fn merge_reports(mut base: ReportMap, overrides: &ReportMap) -> ReportMap {
    base.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    base
}
