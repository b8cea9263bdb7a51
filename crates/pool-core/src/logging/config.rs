//! Logging configuration.
//!
//! Level precedence: `-v`/`-q`, then `POOL_LOG`, then `RUST_LOG`. Raw
//! `RUST_LOG` directives only apply when neither of the others is given.

/// Diagnostic output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// JSON lines.
    Jsonl,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// The loader runs inside session hooks and stays quiet.
    #[default]
    Warn,
    Error,
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" | "quiet" => Ok(LogLevel::Off),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// `RUST_LOG` directives, set only when no explicit level was chosen.
    pub directives: Option<String>,
}

impl LogConfig {
    /// Create config from environment and CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::from_lookup(cli_level, cli_format, |key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup<F>(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LogConfig::default();

        let pool_log = lookup("POOL_LOG");
        match (cli_level, pool_log) {
            (Some(level), _) => config.level = level,
            // An unparseable POOL_LOG still counts as an explicit choice.
            (None, Some(val)) => config.level = val.parse().unwrap_or_default(),
            (None, None) => config.directives = lookup("RUST_LOG"),
        }

        if let Some(format) = cli_format {
            config.format = format;
        } else if let Some(val) = lookup("POOL_LOG_FORMAT") {
            config.format = val.parse().unwrap_or_default();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("quiet".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_defaults_are_quiet() {
        let config = LogConfig::from_lookup(None, None, env(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level, LogLevel::Warn);
    }

    #[test]
    fn test_rust_log_used_verbatim_when_nothing_else_given() {
        let config = LogConfig::from_lookup(None, None, env(&[("RUST_LOG", "pool_core=trace,info")]));
        assert_eq!(config.directives.as_deref(), Some("pool_core=trace,info"));
    }

    #[test]
    fn test_pool_log_beats_rust_log() {
        let config = LogConfig::from_lookup(None, None, env(&[("POOL_LOG", "off"), ("RUST_LOG", "debug")]));
        assert_eq!(config.level, LogLevel::Off);
        assert_eq!(config.directives, None);
    }

    #[test]
    fn test_cli_level_beats_env() {
        let vars = [("POOL_LOG", "trace"), ("RUST_LOG", "debug"), ("POOL_LOG_FORMAT", "jsonl")];
        let config = LogConfig::from_lookup(Some(LogLevel::Off), Some(LogFormat::Human), env(&vars));
        assert_eq!(config.level, LogLevel::Off);
        assert_eq!(config.format, LogFormat::Human);
        assert_eq!(config.directives, None);
    }

    #[test]
    fn test_bad_pool_log_falls_back_to_default_level() {
        let config = LogConfig::from_lookup(None, None, env(&[("POOL_LOG", "loud"), ("RUST_LOG", "trace")]));
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.directives, None);
    }
}
