// SPDX-License-Identifier: MPL-2.0
//! Process-wide `tracing` subscriber.
//!
//! The filter comes from `RUST_LOG` when set, otherwise the crate logs at
//! `info` and dependencies at `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_showcase=info,warn";

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(build_filter())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn second_init_is_rejected() {
        init();
        assert!(!init());
    }
}
