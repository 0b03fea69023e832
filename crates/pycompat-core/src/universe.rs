//! Candidate universe and constraint intersection.

use std::ops::RangeInclusive;

use crate::specifier::VersionConstraint;
use crate::version::PyVersion;

/// The bounded, enumerable set of runtime versions under consideration.
///
/// Candidates are kept sorted ascending and free of duplicates.
#[derive(Debug, Clone, Default)]
pub struct CandidateUniverse {
    versions: Vec<PyVersion>,
}

impl CandidateUniverse {
    /// Every `major.minor` pair in the two inclusive ranges.
    pub fn major_minor(majors: RangeInclusive<u64>, minors: RangeInclusive<u64>) -> Self {
        let versions = majors
            .flat_map(|major| minors.clone().map(move |minor| PyVersion::major_minor(major, minor)))
            .collect();
        Self::from_versions(versions)
    }

    pub fn from_versions(mut versions: Vec<PyVersion>) -> Self {
        versions.sort();
        versions.dedup();
        Self { versions }
    }

    pub fn versions(&self) -> &[PyVersion] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Candidates satisfying every constraint, ascending.
    ///
    /// No constraints yields the whole universe; an empty result means the
    /// constraints are mutually exclusive within this universe.
    pub fn intersect(&self, constraints: &[VersionConstraint]) -> Vec<PyVersion> {
        self.versions
            .iter()
            .filter(|candidate| constraints.iter().all(|c| c.matches(candidate)))
            .cloned()
            .collect()
    }
}

/// Free-function form of [`CandidateUniverse::intersect`].
pub fn intersect(constraints: &[VersionConstraint], universe: &CandidateUniverse) -> Vec<PyVersion> {
    let compatible = universe.intersect(constraints);
    tracing::debug!(
        constraints = constraints.len(),
        candidates = universe.len(),
        compatible = compatible.len(),
        "intersected version constraints"
    );
    compatible
}
