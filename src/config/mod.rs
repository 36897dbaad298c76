#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{ConversationsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const PRODUCTION_BASE_URL: &str = "https://api.bazaarvoice.com/data/";
pub const STAGING_BASE_URL: &str = "https://stg.api.bazaarvoice.com/data/";
pub const DEFAULT_API_VERSION: &str = "5.4";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    /// Conversations API key, sent as `passkey`.
    pub api_key: String,
    #[serde(default)]
    pub staging: bool,
    /// 覆寫 API 位址，主要給測試或代理使用
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            staging: false,
            base_url: None,
            api_version: default_api_version(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            app_id: None,
            app_version: None,
        }
    }

    pub fn staging(mut self, staging: bool) -> Self {
        self.staging = staging;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn app_identity(mut self, app_id: impl Into<String>, app_version: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self.app_version = Some(app_version.into());
        self
    }

    /// 從環境變數載入配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConversationsError::MissingConfig {
                field: name.to_string(),
            })
        };

        let mut config = Self::new(required("BV_CLIENT_ID")?, required("BV_API_KEY_CONVERSATIONS")?);

        if let Some(staging) = lookup("BV_STAGING") {
            config.staging = parse_flag("BV_STAGING", &staging)?;
        }
        config.base_url = lookup("BV_BASE_URL");
        if let Some(version) = lookup("BV_API_VERSION") {
            config.api_version = version;
        }
        if let Some(timeout) = lookup("BV_TIMEOUT_SECONDS") {
            config.timeout_seconds =
                timeout
                    .parse()
                    .map_err(|_| ConversationsError::InvalidConfigValue {
                        field: "BV_TIMEOUT_SECONDS".to_string(),
                        value: timeout.clone(),
                        reason: "must be a whole number of seconds".to_string(),
                    })?;
        }
        config.app_id = lookup("BV_APP_ID");
        config.app_version = lookup("BV_APP_VERSION");

        Ok(config)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConversationsError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(url) => url.as_str(),
            None if self.staging => STAGING_BASE_URL,
            None => PRODUCTION_BASE_URL,
        };
        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        }
    }
}

/// 替換環境變數 (例如 ${BV_API_KEY})，找不到的變數保留原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConversationsError::Config {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConversationsError::InvalidConfigValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

impl ConfigProvider for ClientConfig {
    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> String {
        self.resolved_base_url()
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("client_id", &self.client_id)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("api_version", &self.api_version)?;
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        tracing::debug!("Configuration for {} validated", self.client_id);
        Ok(())
    }
}
