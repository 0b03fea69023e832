//! PyPI JSON API: the `Requires-Python` declaration of a pinned release.

use serde::Deserialize;

use pycompat_core::requirement::Requirement;
use pycompat_util::errors::{PycompatError, PycompatResult};

use crate::source::Fetch;

#[derive(Debug, Deserialize)]
struct ReleaseMetadata {
    #[serde(default)]
    info: ReleaseInfo,
}

#[derive(Debug, Default, Deserialize)]
struct ReleaseInfo {
    #[serde(default)]
    requires_python: Option<String>,
}

/// `https://pypi.org/pypi/<name>/<version>/json`
pub fn metadata_url(base: &str, requirement: &Requirement) -> String {
    format!(
        "{}/{}/{}/json",
        base.trim_end_matches('/'),
        requirement.name,
        requirement.version
    )
}

/// Extract `info.requires_python` from a release metadata document.
///
/// Absent, `null` and blank values all mean "no declaration".
pub fn parse_requires_python(json: &str) -> PycompatResult<Option<String>> {
    let meta: ReleaseMetadata = serde_json::from_str(json).map_err(|e| PycompatError::Network {
        message: format!("Malformed package metadata: {e}"),
    })?;
    Ok(meta
        .info
        .requires_python
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Look up the `Requires-Python` of one release.
pub fn requires_python(
    fetch: &dyn Fetch,
    base: &str,
    requirement: &Requirement,
) -> PycompatResult<Option<String>> {
    let body = fetch.fetch_text(&metadata_url(base, requirement))?;
    parse_requires_python(&body)
}
