//! Artifact filtering, de-duplication and companion version derivation.

use std::collections::HashSet;

use pycompat_core::version::split_major_minor;

use crate::filename::{ArtifactKind, ArtifactRecord};
use crate::matrix::CompatibilityMatrix;

/// What the user asked for. Absent filters match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    /// `major.minor` runtime version, compared exactly.
    pub target_runtime_version: String,
    /// Substring the build variant must contain, e.g. `121` or `cu12`.
    pub variant_substring: Option<String>,
    /// Build variant that must match exactly, e.g. `cpu`.
    pub exact_variant: Option<String>,
}

impl MatchCriteria {
    pub fn new(target_runtime_version: impl Into<String>) -> Self {
        Self {
            target_runtime_version: target_runtime_version.into(),
            variant_substring: None,
            exact_variant: None,
        }
    }

    pub fn with_variant_substring(mut self, substring: Option<String>) -> Self {
        self.variant_substring = substring.filter(|s| !s.is_empty());
        self
    }

    pub fn with_exact_variant(mut self, variant: Option<String>) -> Self {
        self.exact_variant = variant.filter(|s| !s.is_empty());
        self
    }

    pub fn accepts(&self, record: &ArtifactRecord) -> bool {
        if record.target_runtime_version != self.target_runtime_version {
            return false;
        }
        if let Some(ref sub) = self.variant_substring {
            if !record.build_variant.contains(sub.as_str()) {
                return false;
            }
        }
        if let Some(ref exact) = self.exact_variant {
            if record.build_variant != *exact {
                return false;
            }
        }
        true
    }

    /// `Python 3.10, CUDA any, and variant any`
    pub fn describe(&self) -> String {
        format!(
            "Python {}, CUDA {}, and variant {}",
            self.target_runtime_version,
            self.variant_substring.as_deref().unwrap_or("any"),
            self.exact_variant.as_deref().unwrap_or("any"),
        )
    }
}

/// Keep the first record of each `(package, version, build_variant)`.
pub fn deduplicate(records: impl IntoIterator<Item = ArtifactRecord>) -> Vec<ArtifactRecord> {
    let mut seen: HashSet<(ArtifactKind, String, String)> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.package, r.version.clone(), r.build_variant.clone())))
        .collect()
}

/// Filter by `criteria`, then de-duplicate, preserving first-seen order.
pub fn match_artifacts(
    criteria: &MatchCriteria,
    records: impl IntoIterator<Item = ArtifactRecord>,
) -> Vec<ArtifactRecord> {
    let matched = deduplicate(records.into_iter().filter(|r| criteria.accepts(r)));
    tracing::debug!(matched = matched.len(), "{}", criteria.describe());
    matched
}

/// A buildable torch set for one matched torch wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub runtime_version: String,
    pub build_variant: String,
    pub torch_version: String,
    /// torchaudio ships on the torch release train.
    pub audio_version: String,
    /// `None` when the matrix has no entry for this torch `major.minor`.
    pub vision_version: Option<String>,
}

impl Resolution {
    pub fn torch_pin(&self) -> String {
        self.pin(ArtifactKind::Torch, &self.torch_version)
    }

    pub fn audio_pin(&self) -> String {
        self.pin(ArtifactKind::Torchaudio, &self.audio_version)
    }

    pub fn vision_pin(&self) -> Option<String> {
        self.vision_version
            .as_deref()
            .map(|v| self.pin(ArtifactKind::Torchvision, v))
    }

    /// `torch==2.1.0+cu121`; wheels without a local tag pin the bare version.
    fn pin(&self, kind: ArtifactKind, version: &str) -> String {
        if self.build_variant == crate::filename::NO_VARIANT {
            format!("{kind}=={version}")
        } else {
            format!("{kind}=={version}+{}", self.build_variant)
        }
    }
}

/// Derive the torchvision version for a torch version.
///
/// Heuristic: the matrix gives the torchvision `major.minor` for a torch
/// `major.minor`, and torchvision is assumed to reuse torch's patch number
/// (`2.1.2` -> `0.16.2`). Real release histories mostly follow this, but
/// nothing validates it beyond the matrix itself.
pub fn derive_companion_version(primary_version: &str, matrix: &CompatibilityMatrix) -> Option<String> {
    let (major_minor, patch) = split_major_minor(primary_version)?;
    let baseline = matrix.companion_baseline(&major_minor)?;
    Some(format!("{baseline}.{patch}"))
}

/// Build a [`Resolution`] for every primary-kind record, in order.
pub fn resolve(records: &[ArtifactRecord], matrix: &CompatibilityMatrix) -> Vec<Resolution> {
    records
        .iter()
        .filter(|r| r.package.is_primary())
        .map(|r| {
            let vision_version = derive_companion_version(&r.version, matrix);
            if vision_version.is_none() {
                tracing::debug!("no torchvision baseline for torch {}", r.version);
            }
            Resolution {
                runtime_version: r.target_runtime_version.clone(),
                build_variant: r.build_variant.clone(),
                torch_version: r.version.clone(),
                audio_version: r.version.clone(),
                vision_version,
            }
        })
        .collect()
}
