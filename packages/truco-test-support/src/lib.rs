//! Test support shared by the truco crates.
//!
//! Logging initialization for test binaries and the common proptest
//! configuration.

pub mod logging;
pub mod proptest_prelude;
