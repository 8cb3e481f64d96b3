use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "kindle_engine=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Filter applied when neither the config nor `RUST_LOG` provides one.
///
/// wgpu internals are chatty at info; keep them at warn.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before the benchmark
/// and the runtime start.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| install(config));
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
        Some(filter) => builder.parse_filters(&filter),
        None => builder.parse_filters(DEFAULT_FILTER),
    };

    builder.write_style(config.write_style);

    // A second logger may already be installed by a test harness.
    if builder.try_init().is_err() {
        log::debug!("logger already installed; keeping the existing one");
        return;
    }

    log::debug!("logging initialized");
}

/// Browser builds log to the developer console at a single level.
#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    console_error_panic_hook::set_once();

    let filter = resolve_filter(config.env_filter, None);
    let level = console_level(filter.as_deref().unwrap_or(DEFAULT_FILTER));

    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed; keeping the existing one");
    }
}

/// Global level of an `env_logger` filter: its first bare directive.
#[cfg(any(target_arch = "wasm32", test))]
fn console_level(filter: &str) -> log::Level {
    filter
        .split(',')
        .map(str::trim)
        .filter(|d| !d.contains('='))
        .find_map(|d| d.parse().ok())
        .unwrap_or(log::Level::Info)
}

/// Explicit config wins over the environment.
fn resolve_filter(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured.or(env).filter(|f| !f.trim().is_empty())
}
