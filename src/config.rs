use crate::chat::{
    ChatConfig, DEFAULT_GREETING, DEFAULT_REPLY_DELAY_MAX_MS, DEFAULT_REPLY_DELAY_MIN_MS,
    ReplyDelay,
};
use crate::types::ThemeMode;
use std::env;

pub const ENV_REPLY_DELAY_MIN_MS: &str = "PROTOBOT_REPLY_DELAY_MIN_MS";
pub const ENV_REPLY_DELAY_MAX_MS: &str = "PROTOBOT_REPLY_DELAY_MAX_MS";
pub const ENV_THEME: &str = "PROTOBOT_THEME";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("reply delay window is empty: min {min_ms}ms, max {max_ms}ms")]
    EmptyDelayWindow { min_ms: u64, max_ms: u64 },

    #[error("unknown theme {0:?} (expected light or dark)")]
    UnknownTheme(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub theme: ThemeMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; missing or blank keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let min_ms = match value(ENV_REPLY_DELAY_MIN_MS) {
            Some(raw) => parse_millis(ENV_REPLY_DELAY_MIN_MS, &raw)?,
            None => DEFAULT_REPLY_DELAY_MIN_MS,
        };
        let max_ms = match value(ENV_REPLY_DELAY_MAX_MS) {
            Some(raw) => parse_millis(ENV_REPLY_DELAY_MAX_MS, &raw)?,
            None => DEFAULT_REPLY_DELAY_MAX_MS,
        };
        let reply_delay =
            ReplyDelay::new(min_ms, max_ms).ok_or(ConfigError::EmptyDelayWindow { min_ms, max_ms })?;

        let theme = match value(ENV_THEME) {
            Some(raw) => parse_theme(&raw)?,
            None => ThemeMode::default(),
        };

        Ok(Self {
            chat: ChatConfig {
                greeting: DEFAULT_GREETING.to_string(),
                reply_delay,
            },
            theme,
        })
    }
}

/// Loads `KEY=value` lines bundled with the binary into the process
/// environment. Variables that are already set keep their value.
pub fn load_bundled_env(source: &str) -> Result<(), dotenvy::Error> {
    dotenvy::from_read(source.as_bytes())
}

fn parse_millis(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

fn parse_theme(raw: &str) -> Result<ThemeMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(ConfigError::UnknownTheme(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chat.reply_delay.min(), Duration::from_millis(800));
        assert_eq!(config.chat.reply_delay.max(), Duration::from_millis(1200));
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_REPLY_DELAY_MIN_MS, "10"),
            (ENV_REPLY_DELAY_MAX_MS, " 20 "),
            (ENV_THEME, "Dark"),
        ]))
        .unwrap();
        assert_eq!(config.chat.reply_delay, ReplyDelay::new(10, 20).unwrap());
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_THEME, "  ")])).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_REPLY_DELAY_MIN_MS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key, .. } if key == ENV_REPLY_DELAY_MIN_MS));

        let err = AppConfig::from_lookup(lookup_from(&[
            (ENV_REPLY_DELAY_MIN_MS, "900"),
            (ENV_REPLY_DELAY_MAX_MS, "900"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyDelayWindow {
                min_ms: 900,
                max_ms: 900
            }
        );

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_THEME, "octane")])).unwrap_err();
        assert_eq!(err.to_string(), "unknown theme \"octane\" (expected light or dark)");
    }

    #[test]
    fn test_bundled_env_keeps_real_environment() {
        // SAFETY: keys are unique to this test
        unsafe {
            env::set_var("PROTOBOT_TEST_BUNDLED_KEPT", "from-shell");
        }

        let bundled = "# defaults\n\
            PROTOBOT_TEST_BUNDLED_KEPT=bundled\n\
            export PROTOBOT_TEST_BUNDLED_FRESH=\"quoted value\"\n";
        load_bundled_env(bundled).unwrap();

        assert_eq!(env::var("PROTOBOT_TEST_BUNDLED_KEPT").unwrap(), "from-shell");
        assert_eq!(
            env::var("PROTOBOT_TEST_BUNDLED_FRESH").unwrap(),
            "quoted value"
        );
    }
}
