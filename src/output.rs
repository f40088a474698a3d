//! Global output configuration and log setup.
//!
//! ## Design Principles
//!
//! - Translation output goes to stdout (for piping)
//! - Logs and status messages go to stderr
//! - Quiet mode lowers logging to errors only
//! - Colors can be disabled via flag or `NO_COLOR` environment variable

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
    /// Log level used when `RUST_LOG` is not set.
    pub default_level: &'static str,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
            default_level: "warn",
        }
    }
}

impl OutputConfig {
    /// The filter directive to use when `RUST_LOG` does not provide one.
    pub const fn filter_directive(&self) -> &'static str {
        if self.quiet { "error" } else { self.default_level }
    }
}

/// Initialize output settings and install the tracing subscriber.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let filter = if config.quiet {
        EnvFilter::new(config.filter_directive())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!config.no_color)
        .with_target(false)
        .try_init();

    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}
