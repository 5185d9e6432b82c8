use crate::error::SplitterError;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default chat-completion API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// slidesplit application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Bearer credential for the chat-completion API
    pub api_key: String,

    /// Chat-completion API base URL
    pub base_url: String,

    /// Model used for segmentation
    pub llm_model: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Log level
    pub log_level: String,

    /// Optional log directory; console-only logging when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            timeout_secs: 300,
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

// The API key never reaches logs or panic messages.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("llm_model", &self.llm_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SplitterError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SplitterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                SplitterError::config(format!("LLM_TIMEOUT_SECS must be a whole number, got '{}'", raw))
            })?,
            None => defaults.timeout_secs,
        };

        let config = Self {
            api_key: lookup("OPENAI_API_KEY")
                .map(|key| key.trim().to_string())
                .unwrap_or_default(),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            llm_model: lookup("LLM_MODEL").unwrap_or(defaults.llm_model),
            timeout_secs,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }

    /// HTTP timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SplitterError> {
        if self.api_key.is_empty() {
            return Err(SplitterError::config(
                "OPENAI_API_KEY is not set (export it or add it to .env)",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SplitterError::config(
                "OPENAI_BASE_URL must start with http:// or https://",
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(SplitterError::config("LLM model name cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(SplitterError::config("LLM_TIMEOUT_SECS cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 300);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", " sk-test \n"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("LLM_MODEL", "gpt-4o"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("LOG_DIR", "/tmp/slidesplit"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.llm_model, "gpt-4o");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/slidesplit")));
        assert_eq!(config.base_url, "http://localhost:8080/v1/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("LLM_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(SplitterError::Config(_))));
    }

    #[test]
    fn test_validate() {
        let missing_key = AppConfig::default();
        assert!(missing_key.validate().is_err());

        let mut config = AppConfig {
            api_key: "sk-test".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());

        config.base_url = "api.openai.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = DEFAULT_BASE_URL.to_string();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            api_key: "sk-very-secret".to_string(),
            ..AppConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
