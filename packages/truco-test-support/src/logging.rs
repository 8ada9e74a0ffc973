//! Test logging initialization for the truco crates
//!
//! One initializer shared by unit tests (through a `ctor` in each crate's
//! `lib.rs`) and integration test binaries (through `tests/common`).

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Crates whose events `TRUCO_TEST_LOG` turns up.
const ENGINE_TARGETS: [&str; 2] = ["truco", "truco_simulator"];

/// Quiet default: warnings and errors from everything.
const DEFAULT_FILTER: &str = "warn";

/// Initialize structured logging for tests.
///
/// This function is idempotent and race-safe. It can be called multiple times
/// without panicking. The filter is chosen in this order of precedence:
///
/// 1. `TRUCO_TEST_LOG` (a level such as `debug`): engine crates at that
///    level, everything else at `warn`. Handy for following a round's bids
///    without dependency noise.
/// 2. `TEST_LOG` environment variable (full filter directives)
/// 3. `RUST_LOG` environment variable (fallback)
/// 4. `"warn"` (default, quiet)
///
/// The subscriber is configured with:
/// - `with_test_writer()` for cargo/nextest output capture
/// - `without_time()` for stable, clean output
/// - `try_init().ok()` to never panic if already initialized
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = filter_directives(
            std::env::var("TRUCO_TEST_LOG").ok().as_deref(),
            std::env::var("TEST_LOG").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        );
        let filter =
            EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time() // Stable output
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}

/// Filter directives for the given environment values; blank values count as
/// unset.
fn filter_directives(
    truco_level: Option<&str>,
    test_log: Option<&str>,
    rust_log: Option<&str>,
) -> String {
    fn set(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    if let Some(level) = set(truco_level) {
        let mut directives = vec![DEFAULT_FILTER.to_string()];
        directives.extend(ENGINE_TARGETS.iter().map(|t| format!("{t}={level}")));
        return directives.join(",");
    }
    set(test_log)
        .or_else(|| set(rust_log))
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}
