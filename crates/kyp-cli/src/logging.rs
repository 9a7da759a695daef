//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,kyp=debug";

/// Filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_FILTER: &str = "debug";

/// Build the log filter. `RUST_LOG` always wins.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            VERBOSE_FILTER.into()
        } else {
            DEFAULT_FILTER.into()
        }
    })
}

/// Install the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}
