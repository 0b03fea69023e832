//! Shared utilities for pycompat.
//!
//! This crate provides cross-cutting concerns used by all other pycompat
//! crates: the unified error type, the data directory location, and
//! Cargo-style terminal status lines and spinners.

pub mod errors;
pub mod progress;

use std::path::{Path, PathBuf};

/// Returns the path to the pycompat data directory (`~/.pycompat/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".pycompat")
}
