//! Wheel filename extraction from an HTML index page.

use once_cell::sync::Lazy;
use regex::Regex;

static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href\s*=\s*["']([^"']+)["']"#).expect("valid regex"));

/// Collect the wheel filenames linked from `html`, in document order.
///
/// Each `href` is reduced to its last path segment with any query or
/// fragment removed; only segments that start with `torch` and end in
/// `.whl` are kept. Directory structure in the link is ignored.
pub fn extract_wheel_filenames(html: &str) -> Vec<String> {
    HREF.captures_iter(html)
        .filter_map(|caps| wheel_segment(caps.get(1)?.as_str()))
        .collect()
}

fn wheel_segment(href: &str) -> Option<String> {
    let path = href.split(['#', '?']).next()?;
    let segment = path.rsplit('/').next()?;
    (segment.starts_with("torch") && segment.ends_with(".whl")).then(|| segment.to_string())
}
