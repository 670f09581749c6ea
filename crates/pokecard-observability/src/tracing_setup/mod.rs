//! Tracing setup: subscriber installation, span definitions and event helpers.
//!
//! Library crates only emit events. The binary embedding pokecard calls one of
//! the `init_*` functions once at startup.

pub mod events;
pub mod spans;

use std::sync::Once;

use pokecard_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "POKECARD_LOG";

/// Filter used when `POKECARD_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pokecard=info";

static INIT: Once = Once::new();

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a human-readable subscriber filtered by `POKECARD_LOG`.
///
/// Idempotent. If another subscriber is already installed it is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(DEFAULT_FILTER))
            .with_target(true)
            .try_init();
    });
}

/// Install a JSON-lines subscriber filtered by `POKECARD_LOG`.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(DEFAULT_FILTER))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}

/// Install a subscriber as described by the `[observability]` config section.
///
/// `POKECARD_LOG` still wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let fallback = format!("pokecard={}", config.log_level);
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter(&fallback))
            .with_target(true);
        let _ = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
