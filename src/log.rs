#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that switches the CLI to debug logging.
pub const DEBUG_ENV_VAR: &str = "WORDSENSE_DEBUG";

/// Initialize logging for wordsense.
///
/// # Behavior
/// - **Native (CLI):** `Info` by default, `Debug` when `debug_enabled`;
///   `RUST_LOG` overrides both. Safe to call more than once.
/// - **WASM:** logs to the browser console at `Debug` or `Info`.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        // a second initialization fails harmlessly; keep the first logger
        if console_log::init_with_level(level).is_ok() {
            log::info!("WASM logger initialized at {level:?} level");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp_millis()
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

/// True if the debug environment variable is set (to anything).
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}
