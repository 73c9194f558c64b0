use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directives for console output (default: "spoken_numbers=warn")
    pub console_log_level: String,

    /// Log format: "json", "pretty", or "compact" (default: "compact")
    pub format: LogFormat,

    /// Include module targets in log lines (default: false)
    pub show_target: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_log_level: "spoken_numbers=warn".to_string(),
            format: LogFormat::Compact,
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Console filter
        if let Ok(level) = env::var("RUST_LOG") {
            config.console_log_level = level;
        }

        // Log format
        if let Ok(format_str) = env::var("SPOKEN_NUMBERS_LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Compact,
            };
        }

        // Module targets
        if let Ok(val) = env::var("SPOKEN_NUMBERS_LOG_TARGET") {
            config.show_target = val.to_lowercase() == "true";
        }

        config
    }
}
