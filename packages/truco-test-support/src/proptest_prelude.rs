//! Shared proptest configuration.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: number of cases per property (default 32).
//! - `PROPTEST_MAX_SHRINK_MS`: optional cap for shrinking time in milliseconds.

use proptest::prelude::ProptestConfig;

const DEFAULT_CASES: u32 = 32;

pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CASES)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // no regression files in the source tree
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
