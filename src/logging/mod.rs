pub mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

pub use config::{LogConfig, LogFormat};

/// Initialize console logging for the binaries
///
/// Logs go to stderr so stdout stays clean for converted words and JSON.
/// `RUST_LOG` overrides the configured filter.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.console_log_level))?;

    let base = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target);

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Compact => base.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(filter))
        .try_init()?;

    tracing::debug!(format = ?config.format, "Logging initialized");

    Ok(())
}
