//! High-level operations wiring CLI commands to the resolution core.
//!
//! Every operation takes a [`source::Fetch`] so the network can be swapped
//! for canned responses in tests.

pub mod ops_python;
pub mod ops_wheels;
pub mod pypi;
pub mod source;
