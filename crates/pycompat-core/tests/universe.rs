use std::str::FromStr;

use pycompat_core::specifier::VersionConstraint;
use pycompat_core::universe::{intersect, CandidateUniverse};
use pycompat_core::version::PyVersion;

fn constraints(specs: &[&str]) -> Vec<VersionConstraint> {
    specs
        .iter()
        .map(|s| VersionConstraint::from_str(s).unwrap())
        .collect()
}

fn rendered(versions: &[PyVersion]) -> Vec<String> {
    versions.iter().map(ToString::to_string).collect()
}

fn python3() -> CandidateUniverse {
    CandidateUniverse::major_minor(3..=3, 0..=13)
}

#[test]
fn universe_enumerates_major_minor_pairs() {
    let universe = python3();
    assert_eq!(universe.len(), 14);
    assert_eq!(universe.versions()[0].to_string(), "3.0");
    assert_eq!(universe.versions()[13].to_string(), "3.13");
}

#[test]
fn universe_is_sorted_semantically() {
    let universe = CandidateUniverse::major_minor(2..=3, 8..=11);
    assert_eq!(
        rendered(universe.versions()),
        vec!["2.8", "2.9", "2.10", "2.11", "3.8", "3.9", "3.10", "3.11"]
    );
}

#[test]
fn intersect_multiple_constraints() {
    let result = intersect(&constraints(&[">=3.8,<3.12", ">=3.9"]), &python3());
    assert_eq!(rendered(&result), vec!["3.9", "3.10", "3.11"]);
}

#[test]
fn intersect_without_constraints_is_whole_universe() {
    let universe = python3();
    let result = intersect(&[], &universe);
    assert_eq!(result.len(), universe.len());
}

#[test]
fn intersect_disjoint_is_empty() {
    assert!(intersect(&constraints(&[">=4.0"]), &python3()).is_empty());
    assert!(intersect(&constraints(&["<3.8", ">=3.10"]), &python3()).is_empty());
}

#[test]
fn intersect_with_exclusions_and_compatible_release() {
    let result = intersect(&constraints(&["~=3.8", "!=3.9.*", "<3.12"]), &python3());
    assert_eq!(rendered(&result), vec!["3.8", "3.10", "3.11"]);
}

#[test]
fn patch_level_lower_bound_excludes_its_minor() {
    // 3.8 is treated as 3.8.0, which is below 3.8.1
    let result = intersect(&constraints(&[">=3.8.1,<3.10"]), &python3());
    assert_eq!(rendered(&result), vec!["3.9"]);
}

#[test]
fn from_versions_dedups_equal_versions() {
    let universe = CandidateUniverse::from_versions(vec![
        PyVersion::from_str("3.10").unwrap(),
        PyVersion::from_str("3.9").unwrap(),
        PyVersion::from_str("3.10.0").unwrap(),
    ]);
    assert_eq!(rendered(universe.versions()), vec!["3.9", "3.10"]);
}
