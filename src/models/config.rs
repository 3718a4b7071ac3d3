use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Language codes the welcome screen offers
pub const SUPPORTED_LANGUAGES: [&str; 6] = ["en", "hi", "bn", "ta", "or", "ml"];

/// Configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub language: String,
    pub log_file: PathBuf,
    pub log_level: String,
    pub tick_rate_ms: u64,
    pub initial_view: String,
    pub demo_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            log_file: PathBuf::from("arogya_tui.log"),
            log_level: "info".to_string(),
            tick_rate_ms: 250,
            initial_view: "dashboard".to_string(),
            demo_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a specific env file, ignoring the process environment
    pub fn from_env_file(path: &Path) -> AppResult<Self> {
        let mut pairs = Vec::new();
        for item in dotenvy::from_path_iter(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?
        {
            let (key, value) =
                item.map_err(|e| AppError::Config(format!("bad line in {}: {}", path.display(), e)))?;
            pairs.push((key, value));
        }

        Self::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Build a config from any key lookup, applying defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let language = lookup("AROGYA_LANGUAGE").unwrap_or(defaults.language);
        if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            return Err(AppError::Config(format!("unsupported language '{}'", language)));
        }

        let tick_rate_ms = match lookup("AROGYA_TICK_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| AppError::Config(format!("AROGYA_TICK_MS must be a positive integer, got '{}'", raw)))?,
            None => defaults.tick_rate_ms,
        };

        Ok(Config {
            language,
            log_file: lookup("AROGYA_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            log_level: lookup("AROGYA_LOG_LEVEL").unwrap_or(defaults.log_level),
            tick_rate_ms,
            initial_view: lookup("AROGYA_INITIAL_VIEW").unwrap_or(defaults.initial_view),
            demo_mode: false,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Directive handed to the tracing `EnvFilter`
    pub fn log_directive(&self) -> String {
        format!("arogya_sarthi={}", self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.log_directive(), "arogya_sarthi=info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("AROGYA_LANGUAGE", "ml"),
            ("AROGYA_TICK_MS", "100"),
            ("AROGYA_INITIAL_VIEW", "voice"),
            ("AROGYA_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.language, "ml");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.initial_view, "voice");
        assert_eq!(config.log_directive(), "arogya_sarthi=debug");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_matches!(
            Config::from_lookup(lookup_from(&[("AROGYA_TICK_MS", "fast")])),
            Err(AppError::Config(_))
        );
        assert_matches!(
            Config::from_lookup(lookup_from(&[("AROGYA_TICK_MS", "0")])),
            Err(AppError::Config(_))
        );
        assert_matches!(
            Config::from_lookup(lookup_from(&[("AROGYA_LANGUAGE", "fr")])),
            Err(AppError::Config(_))
        );
    }

    #[test]
    fn test_unknown_initial_view_is_kept() {
        let config = Config::from_lookup(lookup_from(&[("AROGYA_INITIAL_VIEW", "nowhere")])).unwrap();
        assert_eq!(config.initial_view, "nowhere");
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AROGYA_LANGUAGE=hi").unwrap();
        writeln!(file, "AROGYA_LOG_FILE=/tmp/arogya-test.log").unwrap();

        let config = Config::from_env_file(file.path()).unwrap();
        assert_eq!(config.language, "hi");
        assert_eq!(config.log_file, PathBuf::from("/tmp/arogya-test.log"));
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_missing_env_file_is_config_error() {
        let result = Config::from_env_file(Path::new("/definitely/not/here/.env"));
        assert_matches!(result, Err(AppError::Config(_)));
    }
}
