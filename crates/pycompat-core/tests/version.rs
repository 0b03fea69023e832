use std::str::FromStr;

use pycompat_core::version::PyVersion;

fn v(s: &str) -> PyVersion {
    PyVersion::from_str(s).unwrap()
}

#[test]
fn numeric_not_lexicographic() {
    assert!(v("3.9") < v("3.10"));
    assert!(v("3.10") < v("3.11"));
    assert!(v("2.10.0") > v("2.9.9"));
}

#[test]
fn trailing_zeros_equal() {
    assert_eq!(v("3.8"), v("3.8.0"));
    assert_eq!(v("3"), v("3.0.0"));
    assert!(v("3.8.1") > v("3.8"));
}

#[test]
fn components() {
    let ver = v("3.11.4");
    assert_eq!(ver.major(), 3);
    assert_eq!(ver.minor(), 11);
    assert_eq!(ver.patch(), 4);
    assert_eq!(v("3.11").patch(), 0);
}

#[test]
fn leading_v_and_whitespace() {
    assert_eq!(v(" v3.11 "), v("3.11"));
    assert_eq!(v("v3.11").to_string(), "v3.11");
}

#[test]
fn display_keeps_original_text() {
    assert_eq!(v("3.10").to_string(), "3.10");
    assert_eq!(PyVersion::major_minor(3, 12).to_string(), "3.12");
}

#[test]
fn invalid_versions_rejected() {
    for bad in ["", "three", "3.x", "3.8rc1", "3..8", "3.8.", ">=3.8"] {
        assert!(PyVersion::from_str(bad).is_err(), "expected '{bad}' to fail");
    }
}

#[test]
fn prefix_match_pads_with_zeros() {
    assert!(v("3.1").has_prefix(&[3, 1]));
    assert!(v("3.1.5").has_prefix(&[3, 1]));
    assert!(v("3").has_prefix(&[3, 0]));
    assert!(!v("3").has_prefix(&[3, 1]));
    assert!(!v("3.10").has_prefix(&[3, 1]));
}
