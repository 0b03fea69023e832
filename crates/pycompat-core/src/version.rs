//! Dotted numeric versions as used by `Requires-Python` and wheel tags.
//!
//! Only the release segment of a PEP 440 version is modelled:
//! - Components are split on `.` and compared as numbers, so `3.10 > 3.9`
//! - Missing trailing components count as zero, so `3.8 == 3.8.0`
//! - A single leading `v` is tolerated (`v3.11`)
//!
//! Pre-, post- and dev-release suffixes are rejected; none of the inputs
//! this tool reasons about carry them in practice.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pycompat_util::errors::PycompatError;

/// A parsed release version with numerically comparable components.
#[derive(Debug, Clone)]
pub struct PyVersion {
    original: String,
    release: Vec<u64>,
}

impl PyVersion {
    /// Build a `major.minor` version, the shape of every universe candidate.
    pub fn major_minor(major: u64, minor: u64) -> Self {
        Self {
            original: format!("{major}.{minor}"),
            release: vec![major, minor],
        }
    }

    /// The numeric components as written (no zero padding).
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    /// Component `i`, zero when the version is shorter than that.
    pub fn component(&self, i: usize) -> u64 {
        self.release.get(i).copied().unwrap_or(0)
    }

    /// PEP 440 prefix match, the semantics of `==X.Y.*`.
    ///
    /// The version is zero-padded to the prefix length before comparing, so
    /// `3` matches the prefix `3.0` but not `3.1`.
    pub fn has_prefix(&self, prefix: &[u64]) -> bool {
        prefix
            .iter()
            .enumerate()
            .all(|(i, want)| self.component(i) == *want)
    }
}

impl FromStr for PyVersion {
    type Err = PycompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if body.is_empty() {
            return Err(PycompatError::Version {
                message: "empty version string".to_string(),
            });
        }

        let release = body
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PycompatError::Version {
                message: format!("'{trimmed}' is not a dotted numeric version"),
            })?;

        Ok(Self {
            original: trimmed.to_string(),
            release,
        })
    }
}

impl fmt::Display for PyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for PyVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PyVersion {}

impl Ord for PyVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for PyVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a version string into its `major.minor` head and patch tail.
///
/// `2.1.0` gives `("2.1", "0")`; a two-component `2.1` gives `("2.1", "0")`.
/// Returns `None` when there is no minor component at all.
pub fn split_major_minor(version: &str) -> Option<(String, String)> {
    let mut parts = version.split('.');
    let major = parts.next().filter(|p| !p.is_empty())?;
    let minor = parts.next().filter(|p| !p.is_empty())?;
    let patch = parts.next().filter(|p| !p.is_empty()).unwrap_or("0");
    Some((format!("{major}.{minor}"), patch.to_string()))
}

/// Truncate a dotted version to its first two components.
pub fn truncate_major_minor(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_three_components() {
        assert_eq!(
            split_major_minor("2.1.0"),
            Some(("2.1".to_string(), "0".to_string()))
        );
        assert_eq!(
            split_major_minor("2.5.1"),
            Some(("2.5".to_string(), "1".to_string()))
        );
    }

    #[test]
    fn split_two_components_defaults_patch() {
        assert_eq!(
            split_major_minor("2.1"),
            Some(("2.1".to_string(), "0".to_string()))
        );
    }

    #[test]
    fn split_single_component_is_none() {
        assert_eq!(split_major_minor("2"), None);
        assert_eq!(split_major_minor(""), None);
    }

    #[test]
    fn truncate() {
        assert_eq!(truncate_major_minor("0.16.0"), "0.16");
        assert_eq!(truncate_major_minor("0.16"), "0.16");
    }
}
