//! Human-readable comparison table of mean times.

use std::io;
use std::path::Path;

use tracing::error;

use crate::clock::Clock;
use crate::error::{BenchError, Result};
use crate::report::ReportMap;
use crate::round::round;
use crate::store::{load_reports, merge_reports, Session};

const NAME_HEADER: &str = "name";
const MEAN_HEADER: &str = "mean (ms)";

/// Renders one row per benchmark with its rounded mean time.
pub fn format_table(reports: &ReportMap) -> String {
    let rows: Vec<(&str, String)> = reports
        .iter()
        .map(|(name, r)| (name.as_str(), round(r.mean_time).to_string()))
        .collect();

    let name_width = rows
        .iter()
        .map(|(n, _)| n.chars().count())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(0);
    let mean_width = rows
        .iter()
        .map(|(_, m)| m.len())
        .chain([MEAN_HEADER.len()])
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>mean_width$}\n",
        NAME_HEADER, MEAN_HEADER
    ));
    output.push_str(&"-".repeat(name_width + 2 + mean_width));
    output.push('\n');
    for (name, mean) in rows {
        output.push_str(&format!("{:<name_width$}  {:>mean_width$}\n", name, mean));
    }
    output
}

impl<C: Clock> Session<C> {
    /// Renders this session's reports, filling in names only found in the
    /// report file at `path` when one is given.
    ///
    /// The file must exist and be well formed.
    pub fn render_table(&self, path: Option<&Path>) -> Result<String> {
        let reports = match path {
            Some(path) => {
                let on_disk = load_reports(path)
                    .and_then(|loaded| {
                        loaded.ok_or_else(|| {
                            BenchError::io(
                                path,
                                io::Error::new(io::ErrorKind::NotFound, "report file not found"),
                            )
                        })
                    })
                    .inspect_err(|e| error!(path = %path.display(), "cannot load reports: {e}"))?;
                merge_reports(on_disk, &self.reports)
            }
            None => self.reports.clone(),
        };
        Ok(format_table(&reports))
    }

    pub fn print_table(&self, path: Option<&Path>) -> Result<()> {
        print!("{}", self.render_table(path)?);
        Ok(())
    }
}
