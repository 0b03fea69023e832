//! Operation: find torch wheel sets for a Python version and build variant.

use std::fmt;

use pycompat_core::config::GlobalConfig;
use pycompat_util::errors::PycompatResult;
use pycompat_util::progress;
use pycompat_wheel::filename::{self, ArtifactRecord};
use pycompat_wheel::index;
use pycompat_wheel::matcher::{self, MatchCriteria, Resolution};
use pycompat_wheel::matrix::{self, CompatibilityMatrix};

use crate::source::Fetch;

/// Options for `pycompat wheels`.
#[derive(Debug, Clone)]
pub struct WheelOptions {
    pub criteria: MatchCriteria,
    /// List every matching artifact instead of resolved torch sets.
    pub list_all: bool,
}

/// Result of `pycompat wheels`.
#[derive(Debug, Clone)]
pub struct WheelReport {
    pub criteria: MatchCriteria,
    /// Filtered and de-duplicated artifacts of every kind.
    pub matched: Vec<ArtifactRecord>,
    /// One entry per matched torch wheel; empty in list mode.
    pub resolutions: Vec<Resolution>,
    pub list_all: bool,
}

impl WheelReport {
    pub fn is_empty(&self) -> bool {
        if self.list_all {
            self.matched.is_empty()
        } else {
            self.resolutions.is_empty()
        }
    }
}

impl fmt::Display for WheelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let described = self.criteria.describe();
        if self.is_empty() {
            return writeln!(f, "No compatible wheel files found for {described}.");
        }

        if self.list_all {
            writeln!(f, "Compatible wheel files for {described}:")?;
            for record in &self.matched {
                writeln!(
                    f,
                    "  - {} version: {} (build: {})",
                    record.package, record.version, record.build_variant
                )?;
            }
            return Ok(());
        }

        writeln!(f, "Compatible versions for {described}:")?;
        for resolution in &self.resolutions {
            writeln!(f)?;
            writeln!(f, "{}", resolution.torch_pin())?;
            writeln!(f, "     {}", resolution.audio_pin())?;
            match resolution.vision_pin() {
                Some(pin) => writeln!(f, "     {pin}")?,
                None => writeln!(f, "     - No matching torchvision version found.")?,
            }
        }
        Ok(())
    }
}

/// Fetch and parse the compatibility matrix. Both steps are fatal on
/// failure: no torchvision version can be derived without it.
pub fn fetch_matrix(fetch: &dyn Fetch, config: &GlobalConfig) -> PycompatResult<CompatibilityMatrix> {
    let sp = progress::spinner("Fetching torchvision compatibility matrix...");
    let body = fetch.fetch_text(&config.sources.matrix_url);
    sp.finish_and_clear();
    let parsed = matrix::parse_matrix(&body?)?;
    progress::status("Fetched", &format!("{} torch/torchvision pairs", parsed.len()));
    Ok(parsed)
}

/// Fetch the wheel index and parse every recognisable filename.
///
/// A failed fetch is reported and yields no artifacts.
pub fn fetch_artifacts(fetch: &dyn Fetch, config: &GlobalConfig) -> Vec<ArtifactRecord> {
    let sp = progress::spinner("Fetching wheel index...");
    let body = fetch.fetch_text(&config.sources.wheel_index_url);
    sp.finish_and_clear();

    match body {
        Ok(html) => {
            let names = index::extract_wheel_filenames(&html);
            let records = filename::parse_wheel_filenames(names.iter().map(String::as_str));
            progress::status("Fetched", &format!("{} wheels from the index", records.len()));
            records
        }
        Err(e) => {
            progress::status_warn("Warning", &format!("Failed to fetch wheel index: {e}"));
            Vec::new()
        }
    }
}

/// Match the wheel index against `opts.criteria` and resolve torch sets.
pub fn wheels(
    fetch: &dyn Fetch,
    config: &GlobalConfig,
    opts: &WheelOptions,
) -> PycompatResult<WheelReport> {
    let matrix = if opts.list_all {
        None
    } else {
        Some(fetch_matrix(fetch, config)?)
    };

    let matched = matcher::match_artifacts(&opts.criteria, fetch_artifacts(fetch, config));
    let resolutions = matrix
        .as_ref()
        .map(|m| matcher::resolve(&matched, m))
        .unwrap_or_default();

    Ok(WheelReport {
        criteria: opts.criteria.clone(),
        matched,
        resolutions,
        list_all: opts.list_all,
    })
}
