//! Telemetry helpers for applications embedding `nav-chart`.
//!
//! Tracing stays opt-in: hosts either call one of the initializers below or
//! install their own `tracing` subscriber. Series updates are logged at
//! `debug`, pointer events and frame rebuilds at `trace`, and excluded feed
//! records at `warn`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact subscriber using `RUST_LOG` or [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Installs a compact subscriber, falling back to `fallback_directive` when
/// `RUST_LOG` is missing or malformed.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already set by the host application.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
