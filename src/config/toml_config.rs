use crate::config::base_url::{ApiSettings, BaseUrlResolver, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{GuestError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub env_precedence: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuestError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuestError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            crate::utils::validation::validate_url("api.base_url", base_url.trim())?;
        }

        if let Some(timeout) = self.api.timeout_seconds {
            crate::utils::validation::validate_range("api.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(variables) = &self.api.env_precedence {
            if variables.is_empty() {
                return Err(GuestError::InvalidConfigValueError {
                    field: "api.env_precedence".to_string(),
                    value: "[]".to_string(),
                    reason: "At least one environment variable is required".to_string(),
                });
            }
            for variable in variables {
                crate::utils::validation::validate_non_empty_string(
                    "api.env_precedence",
                    variable,
                )?;
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(GuestError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn resolver(&self) -> BaseUrlResolver {
        match &self.api.env_precedence {
            Some(variables) => BaseUrlResolver::new(variables.iter().cloned()),
            None => BaseUrlResolver::default(),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn api_settings(&self) -> Result<ApiSettings> {
        self.api_settings_with(|key| std::env::var(key).ok())
    }

    /// An explicit `api.base_url` wins over the environment precedence list.
    pub fn api_settings_with<F>(&self, lookup: F) -> Result<ApiSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = match &self.api.base_url {
            Some(base_url) => ApiSettings::new(base_url, self.request_timeout())?,
            None => ApiSettings::from_lookup(&self.resolver(), lookup)?
                .with_timeout(self.request_timeout()),
        };
        tracing::debug!("Using API base URL {}", settings.base_url);
        Ok(settings)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://guests.example.com/"
timeout_seconds = 30

[logging]
level = "debug"
json = true
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());

        let settings = config.api_settings_with(|_| None).unwrap();
        assert_eq!(settings.base_url, "https://guests.example.com");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
        );
        assert!(!config.json_logs());
        assert_eq!(config.resolver(), BaseUrlResolver::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GUESTLIST_TEST_TOML_URL", "https://test.api.com");

        let toml_content = r#"
[api]
base_url = "${GUESTLIST_TEST_TOML_URL}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://test.api.com"));

        std::env::remove_var("GUESTLIST_TEST_TOML_URL");
    }

    #[test]
    fn test_custom_precedence_is_used_without_base_url() {
        let toml_content = r#"
[api]
env_precedence = ["EVENT_API_URL"]
timeout_seconds = 3
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        let settings = config
            .api_settings_with(|key| {
                (key == "EVENT_API_URL").then(|| "http://localhost:4000/".to_string())
            })
            .unwrap();

        assert_eq!(settings.base_url, "http://localhost:4000");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_validation() {
        let bad_url = AppConfig::from_toml_str("[api]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout = AppConfig::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());

        let bad_level = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let no_vars = AppConfig::from_toml_str("[api]\nenv_precedence = []\n").unwrap();
        assert!(no_vars.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://localhost:3001\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:3001"));
    }
}
