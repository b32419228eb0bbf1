//! Tracing setup
//!
//! Logs go to stderr so report output on stdout stays clean. `RUST_LOG`
//! overrides the default level.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter for a verbosity count (`-v` flags)
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "finance_dashboard=warn",
        1 => "finance_dashboard=info",
        2 => "finance_dashboard=debug",
        _ => "finance_dashboard=trace",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "finance_dashboard=warn");
        assert_eq!(default_directive(2), "finance_dashboard=debug");
        assert_eq!(default_directive(9), "finance_dashboard=trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
