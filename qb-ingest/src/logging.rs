//! Tracing subscriber setup
//!
//! The subscriber starts before configuration loads so config warnings are
//! visible. Its filter sits behind a reload handle and is switched to the
//! configured level once the config is known.

use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Startup filter directive when `RUST_LOG` is unset
pub const STARTUP_LEVEL: &str = "info";

/// Reloadable filter layer installed directly on the registry
pub type FilterLayer = reload::Layer<EnvFilter, Registry>;

/// Handle for replacing the filter after startup
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// True when `RUST_LOG` is set; it then takes precedence over the config
pub fn env_filter_overrides() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

/// Build the startup filter: `RUST_LOG` if valid, otherwise [`STARTUP_LEVEL`]
pub fn startup_filter() -> (FilterLayer, FilterHandle) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STARTUP_LEVEL));
    reload::Layer::new(filter)
}

/// Install the global subscriber with a reloadable filter
pub fn init() -> FilterHandle {
    let (filter, handle) = startup_filter();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    handle
}

/// Switch the filter to the configured directive
///
/// # Errors
/// Returns error if the subscriber owning `handle` has been dropped
pub fn apply_config_level(handle: &FilterHandle, level: &str) -> Result<(), reload::Error> {
    handle.reload(EnvFilter::new(level))
}
