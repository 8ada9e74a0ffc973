#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    truco_test_support::logging::init();
}

pub use truco_test_support::proptest_prelude::proptest_config;
