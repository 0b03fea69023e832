//! Wheel filename grammar.
//!
//! `<package>-<version>[+<variant>]-cp<major><minor>-cp<abi>-<platform>.whl`
//!
//! The `+` local-version separator is usually percent-encoded (`%2B`) in
//! index links. Only the known torch family of packages is recognised.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

/// Build variant reported for wheels without a `+<variant>` local tag.
pub const NO_VARIANT: &str = "none";

static WHEEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<package>torch(?:audio|vision|tensorrt|rec|tune)?)
        -(?P<version>\d+(?:\.\d+)*)
        (?:(?:\+|%2[Bb])(?P<variant>[\w.]+))?
        -cp(?P<major>\d)(?P<minor>\d+)
        -cp[0-9A-Za-z]*
        -[\w.]+
        \.whl$",
    )
    .expect("valid regex")
});

/// The artifact kinds this tool knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Torch,
    Torchaudio,
    Torchvision,
    Torchtensorrt,
    Torchrec,
    Torchtune,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Torch => "torch",
            Self::Torchaudio => "torchaudio",
            Self::Torchvision => "torchvision",
            Self::Torchtensorrt => "torchtensorrt",
            Self::Torchrec => "torchrec",
            Self::Torchtune => "torchtune",
        }
    }

    /// The package whose versions key the compatibility matrix.
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Torch)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "torch" => Ok(Self::Torch),
            "torchaudio" => Ok(Self::Torchaudio),
            "torchvision" => Ok(Self::Torchvision),
            "torchtensorrt" => Ok(Self::Torchtensorrt),
            "torchrec" => Ok(Self::Torchrec),
            "torchtune" => Ok(Self::Torchtune),
            other => Err(format!("unknown artifact kind '{other}'")),
        }
    }
}

/// One parsed wheel filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub package: ArtifactKind,
    pub version: String,
    /// Local version tag such as `cu121` or `cpu`, [`NO_VARIANT`] if absent.
    pub build_variant: String,
    /// `major.minor` of the CPython tag, e.g. `3.10` for `cp310`.
    pub target_runtime_version: String,
}

impl ArtifactRecord {
    /// De-duplication key. Platform and ABI tags are deliberately absent:
    /// the Linux and Windows builds of one release are the same artifact.
    pub fn identity(&self) -> (ArtifactKind, &str, &str) {
        (self.package, &self.version, &self.build_variant)
    }

    pub fn has_variant(&self) -> bool {
        self.build_variant != NO_VARIANT
    }
}

/// Parse a wheel filename; anything outside the grammar yields `None`.
pub fn parse_wheel_filename(filename: &str) -> Option<ArtifactRecord> {
    let caps = WHEEL.captures(filename)?;
    let package = caps["package"].parse().ok()?;
    Some(ArtifactRecord {
        package,
        version: caps["version"].to_string(),
        build_variant: caps
            .name("variant")
            .map_or(NO_VARIANT, |m| m.as_str())
            .to_string(),
        target_runtime_version: format!("{}.{}", &caps["major"], &caps["minor"]),
    })
}

/// Parse a batch of filenames, silently dropping the malformed ones.
pub fn parse_wheel_filenames<'a, I>(filenames: I) -> Vec<ArtifactRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dropped = 0usize;
    let records: Vec<ArtifactRecord> = filenames
        .into_iter()
        .filter_map(|name| {
            let record = parse_wheel_filename(name);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();
    tracing::debug!(parsed = records.len(), dropped, "parsed wheel filenames");
    records
}
