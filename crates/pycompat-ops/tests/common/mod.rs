#![allow(dead_code)]

use std::collections::HashMap;

use pycompat_core::config::GlobalConfig;
use pycompat_ops::source::Fetch;

/// Canned responses keyed by URL; anything else is a network error.
#[derive(Default)]
pub struct MapFetcher {
    bodies: HashMap<String, String>,
}

impl MapFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetch for MapFetcher {
    fn fetch_text(&self, url: &str) -> miette::Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| miette::miette!("HTTP 404 for {url}"))
    }
}

pub fn test_config() -> GlobalConfig {
    GlobalConfig::from_toml(
        r#"
[sources]
pypi-url = "https://pypi.test/pypi"
matrix-url = "https://raw.test/README.md"
wheel-index-url = "https://download.test/whl/torch_stable.html"
"#,
    )
    .unwrap()
}

pub fn release_json(requires_python: Option<&str>) -> String {
    match requires_python {
        Some(spec) => format!(r#"{{"info": {{"name": "x", "requires_python": "{spec}"}}}}"#),
        None => r#"{"info": {"name": "x", "requires_python": null}}"#.to_string(),
    }
}
