//! Operation: find the Python versions every pinned requirement supports.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pycompat_core::config::GlobalConfig;
use pycompat_core::requirement::{self, Requirement};
use pycompat_core::specifier::VersionConstraint;
use pycompat_core::universe;
use pycompat_core::version::PyVersion;
use pycompat_util::errors::PycompatResult;
use pycompat_util::progress;

use crate::pypi;
use crate::source::Fetch;

/// What one requirement declared, if anything.
#[derive(Debug, Clone)]
pub struct RequirementConstraint {
    pub requirement: Requirement,
    /// Raw `Requires-Python` text as published.
    pub requires_python: Option<String>,
}

/// Result of `pycompat python`.
#[derive(Debug, Clone)]
pub struct PythonReport {
    pub requirements: Vec<RequirementConstraint>,
    /// Ascending; empty when the declarations cannot all be satisfied.
    pub compatible: Vec<PyVersion>,
}

impl PythonReport {
    pub fn is_determined(&self) -> bool {
        !self.compatible.is_empty()
    }
}

impl fmt::Display for PythonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.requirements {
            match entry.requires_python {
                Some(ref spec) => writeln!(f, "{} requires Python: {spec}", entry.requirement)?,
                None => writeln!(f, "No Requires-Python found for {}", entry.requirement)?,
            }
        }
        if self.is_determined() {
            let versions: Vec<String> = self.compatible.iter().map(ToString::to_string).collect();
            writeln!(f, "Compatible Python versions: [{}]", versions.join(", "))
        } else {
            writeln!(
                f,
                "Could not determine compatible Python versions. Check manually."
            )
        }
    }
}

/// Read `requirements_file` and resolve it against PyPI metadata.
pub fn python(
    fetch: &dyn Fetch,
    config: &GlobalConfig,
    requirements_file: &Path,
) -> PycompatResult<PythonReport> {
    let requirements = requirement::read_requirements(requirements_file)?;
    tracing::debug!(
        "{} pinned requirements in {}",
        requirements.len(),
        requirements_file.display()
    );
    Ok(compatible_python_versions(fetch, config, requirements))
}

/// Look up each requirement's `Requires-Python` and intersect them over the
/// configured universe.
///
/// A failed lookup is reported and treated as "no declaration"; so is a
/// declaration that does not parse.
pub fn compatible_python_versions(
    fetch: &dyn Fetch,
    config: &GlobalConfig,
    requirements: Vec<Requirement>,
) -> PythonReport {
    let mut entries = Vec::with_capacity(requirements.len());
    let mut constraints = Vec::new();

    for req in requirements {
        let sp = progress::spinner(&format!("Fetching metadata for {req}..."));
        let looked_up = pypi::requires_python(fetch, &config.sources.pypi_url, &req);
        sp.finish_and_clear();

        let requires_python = match looked_up {
            Ok(spec) => spec,
            Err(e) => {
                progress::status_warn("Warning", &format!("Failed to fetch metadata for {req}: {e}"));
                None
            }
        };

        if let Some(ref spec) = requires_python {
            match VersionConstraint::from_str(spec) {
                Ok(constraint) => constraints.push(constraint),
                Err(e) => tracing::warn!("ignoring Requires-Python of {req}: {e}"),
            }
        }

        entries.push(RequirementConstraint {
            requirement: req,
            requires_python,
        });
    }

    let compatible = universe::intersect(&constraints, &config.universe.to_universe());
    PythonReport {
        requirements: entries,
        compatible,
    }
}
