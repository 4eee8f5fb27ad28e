#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use crate::views::{DEFAULT_AVATAR_BASE_URL, DEFAULT_CURRENCY_SYMBOL};
use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// 最終生效的設定：預設值 < TOML 檔 < 命令列參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub fallback_enabled: bool,
    pub avatar_base_url: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: None,
            fallback_enabled: true,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            api_endpoint: config.api_endpoint().to_string(),
            timeout_seconds: config.timeout_seconds(),
            fallback_enabled: config.fallback_enabled(),
            avatar_base_url: config.avatar_base_url().to_string(),
            currency_symbol: config.currency_symbol().to_string(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Self::from_toml(&file)
            }
            None => Self::default(),
        };

        if let Some(endpoint) = &cli.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if cli.timeout_seconds.is_some() {
            settings.timeout_seconds = cli.timeout_seconds;
        }
        if cli.no_fallback {
            settings.fallback_enabled = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    fn avatar_base_url(&self) -> &str {
        &self.avatar_base_url
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        validation::validate_url("avatar_base_url", &self.avatar_base_url)?;
        validation::validate_non_empty_string("currency_symbol", &self.currency_symbol)
    }
}
