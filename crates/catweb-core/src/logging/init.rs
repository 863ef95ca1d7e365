use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "catweb_core=trace,catweb_schema=debug"). When unset, `RUST_LOG` is
/// consulted, then `info` is used.
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

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    fn resolved_filter(&self) -> Option<String> {
        self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend once.
///
/// Later calls are ignored, whatever their config.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolved_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        if let Err(err) = builder.try_init() {
            // Another backend was installed outside this function; it gets the message.
            log::warn!("logger already installed: {err}");
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig::with_filter("catweb_core=trace");
        assert_eq!(config.resolved_filter().as_deref(), Some("catweb_core=trace"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::with_filter("warn"));
        init_logging(LoggingConfig::default());
        log::warn!("still alive");
    }
}
