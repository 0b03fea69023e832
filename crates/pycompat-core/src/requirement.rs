//! Pinned requirement parsing (`requirements.txt` style).

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use pycompat_util::errors::{PycompatError, PycompatResult};

static PINNED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_\-]+)==([A-Za-z0-9._\-]+)$").expect("valid regex"));

/// An exact `name==version` pin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

impl Requirement {
    /// Parse one declaration line. Only exact pins match; ranges, extras,
    /// environment markers and bare names yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let caps = PINNED.captures(line)?;
        Some(Self {
            name: caps[1].to_string(),
            version: caps[2].to_string(),
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}

/// Parse every pinned requirement in `text`, in order, duplicates kept.
pub fn parse_requirements(text: &str) -> Vec<Requirement> {
    text.lines()
        .filter_map(|line| {
            let parsed = Requirement::parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                tracing::debug!("skipping unpinned requirement line: {}", line.trim());
            }
            parsed
        })
        .collect()
}

/// Read and parse a requirements file.
pub fn read_requirements(path: &Path) -> PycompatResult<Vec<Requirement>> {
    let content = std::fs::read_to_string(path).map_err(|e| PycompatError::Requirements {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    Ok(parse_requirements(&content))
}
