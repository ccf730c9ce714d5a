use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::moderation::ModerationConfig;

/// Deployment stage. Informational only: it is logged at startup and changes no scoring behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub moderation: ModerationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ModerationConfig::default();
        let moderation = ModerationConfig {
            max_chars: parse_var("RANKSEWA_MAX_REVIEW_CHARS", defaults.max_chars)?,
            min_words: parse_var("RANKSEWA_MIN_REVIEW_WORDS", defaults.min_words)?,
            wordlist_path: env::var("RANKSEWA_PROFANITY_WORDLIST")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            ..defaults
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            moderation,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("RANKSEWA_MAX_REVIEW_CHARS");
        env::remove_var("RANKSEWA_MIN_REVIEW_WORDS");
        env::remove_var("RANKSEWA_PROFANITY_WORDLIST");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.moderation, ModerationConfig::default());
    }

    #[test]
    fn reads_moderation_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("RANKSEWA_MAX_REVIEW_CHARS", "1500");
        env::set_var("RANKSEWA_PROFANITY_WORDLIST", "/etc/ranksewa/words.txt");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.moderation.max_chars, 1500);
        assert_eq!(config.moderation.min_words, 2);
        assert_eq!(
            config.moderation.wordlist_path,
            Some(PathBuf::from("/etc/ranksewa/words.txt"))
        );
    }

    #[test]
    fn rejects_non_numeric_limits() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKSEWA_MIN_REVIEW_WORDS", "two");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidNumber { key, value }) => {
                assert_eq!(key, "RANKSEWA_MIN_REVIEW_WORDS");
                assert_eq!(value, "two");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }
}
