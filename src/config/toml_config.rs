use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use crate::views::{DEFAULT_AVATAR_BASE_URL, DEFAULT_CURRENCY_SYMBOL};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub fallback: Option<FallbackConfig>,
    pub view: Option<ViewConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub avatar_base_url: Option<String>,
    pub currency_symbol: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCTORS_API})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(view) = &self.view {
            if let Some(base) = &view.avatar_base_url {
                validation::validate_url("view.avatar_base_url", base)?;
            }
            if let Some(symbol) = &view.currency_symbol {
                validation::validate_non_empty_string("view.currency_symbol", symbol)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }

    fn fallback_enabled(&self) -> bool {
        self.fallback.as_ref().map(|f| f.enabled).unwrap_or(true)
    }

    fn avatar_base_url(&self) -> &str {
        self.view
            .as_ref()
            .and_then(|v| v.avatar_base_url.as_deref())
            .unwrap_or(DEFAULT_AVATAR_BASE_URL)
    }

    fn currency_symbol(&self) -> &str {
        self.view
            .as_ref()
            .and_then(|v| v.currency_symbol.as_deref())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Validate for TomlConfig {
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
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/doctors.json"
timeout_seconds = 15

[fallback]
enabled = false

[view]
currency_symbol = "Rs."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_endpoint(), "https://api.example.com/doctors.json");
        assert_eq!(config.timeout_seconds(), Some(15));
        assert!(!config.fallback_enabled());
        assert_eq!(config.currency_symbol(), "Rs.");
        assert_eq!(config.avatar_base_url(), DEFAULT_AVATAR_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "https://api.example.com/doctors.json"
"#,
        )
        .unwrap();

        assert!(config.fallback_enabled());
        assert_eq!(config.timeout_seconds(), None);
        assert_eq!(config.currency_symbol(), "₹");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_DOCTORS_ENDPOINT", "https://test.api.com/doctors");

        let toml_content = r#"
[source]
endpoint = "${TEST_DOCTORS_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://test.api.com/doctors");

        std::env::remove_var("TEST_DOCTORS_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_endpoint = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(invalid_endpoint.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "https://api.example.com"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_missing_source_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[view]\ncurrency_symbol = \"$\"\n").unwrap_err();
        assert!(matches!(err, DirectoryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
endpoint = "https://api.example.com/from-file.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_endpoint(), "https://api.example.com/from-file.json");
    }
}
