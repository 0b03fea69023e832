//! Core data types for pycompat: pinned requirement parsing, dotted version
//! ordering, PEP 440 style specifiers, and the candidate-universe
//! intersection that turns a pile of `Requires-Python` declarations into a
//! concrete set of runtime versions.

pub mod config;
pub mod requirement;
pub mod specifier;
pub mod universe;
pub mod version;
