use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use pycompat_util::errors::{PycompatError, PycompatResult};

use crate::universe::CandidateUniverse;

/// Global user configuration loaded from `~/.pycompat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub universe: UniverseConfig,
}

/// Remote locations from `[sources]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_pypi_url", rename = "pypi-url")]
    pub pypi_url: String,
    #[serde(default = "default_matrix_url", rename = "matrix-url")]
    pub matrix_url: String,
    #[serde(default = "default_wheel_index_url", rename = "wheel-index-url")]
    pub wheel_index_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            pypi_url: default_pypi_url(),
            matrix_url: default_matrix_url(),
            wheel_index_url: default_wheel_index_url(),
        }
    }
}

fn default_pypi_url() -> String {
    "https://pypi.org/pypi".to_string()
}

fn default_matrix_url() -> String {
    "https://raw.githubusercontent.com/pytorch/vision/refs/heads/main/README.md".to_string()
}

fn default_wheel_index_url() -> String {
    "https://download.pytorch.org/whl/torch_stable.html".to_string()
}

/// HTTP settings from `[network]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent", rename = "user-agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("pycompat/{}", env!("CARGO_PKG_VERSION"))
}

/// Candidate runtime versions from `[universe]`, as inclusive `[lo, hi]`
/// ranges of major and minor numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    #[serde(default = "default_majors")]
    pub majors: [u64; 2],
    #[serde(default = "default_minors")]
    pub minors: [u64; 2],
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            majors: default_majors(),
            minors: default_minors(),
        }
    }
}

fn default_majors() -> [u64; 2] {
    [3, 3]
}

fn default_minors() -> [u64; 2] {
    [0, 13]
}

/// Upper bound on `major.minor` pairs a `[universe]` table may enumerate.
pub const MAX_UNIVERSE_CANDIDATES: u64 = 1_000;

impl UniverseConfig {
    pub fn to_universe(&self) -> CandidateUniverse {
        CandidateUniverse::major_minor(
            self.majors[0]..=self.majors[1],
            self.minors[0]..=self.minors[1],
        )
    }

    fn validate(&self) -> PycompatResult<()> {
        for (name, [lo, hi]) in [("majors", self.majors), ("minors", self.minors)] {
            if lo > hi {
                return Err(PycompatError::Config {
                    message: format!("universe.{name} range [{lo}, {hi}] is inverted"),
                }
                .into());
            }
        }
        let span = |[lo, hi]: [u64; 2]| (hi - lo).saturating_add(1);
        let candidates = span(self.majors).saturating_mul(span(self.minors));
        if candidates > MAX_UNIVERSE_CANDIDATES {
            return Err(PycompatError::Config {
                message: format!(
                    "universe spans {candidates} versions, at most {MAX_UNIVERSE_CANDIDATES} are allowed"
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.pycompat/config.toml`, or
    /// return defaults if the file doesn't exist.
    pub fn load() -> PycompatResult<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit configuration file. A missing file is an error.
    pub fn load_from(path: &Path) -> PycompatResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PycompatError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> PycompatResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PycompatError::Config {
            message: format!("Failed to parse config: {e}"),
        })?;
        config.universe.validate()?;
        Ok(config)
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        pycompat_util::dirs_path().join("config.toml")
    }
}
