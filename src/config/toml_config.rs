use crate::config::DEFAULT_TIMEOUT_SECONDS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub gateway: GatewaySection,
    pub services: ServicesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub name: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesSection {
    pub product: ServiceAddress,
    pub recommendation: ServiceAddress,
    pub review: ServiceAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAddress {
    pub host: String,
    pub port: u16,
}

impl ServiceAddress {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GatewayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRODUCT_HOST})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn product_service_url(&self) -> String {
        self.services.product.base_url()
    }

    fn recommendation_service_url(&self) -> String {
        self.services.recommendation.base_url()
    }

    fn review_service_url(&self) -> String {
        self.services.review.base_url()
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.gateway.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("services.product", &self.services.product.base_url())?;
        validate_url(
            "services.recommendation",
            &self.services.recommendation.base_url(),
        )?;
        validate_url("services.review", &self.services.review.base_url())?;
        validate_positive_number(
            "services.product.port",
            u64::from(self.services.product.port),
            1,
        )?;
        validate_positive_number(
            "services.recommendation.port",
            u64::from(self.services.recommendation.port),
            1,
        )?;
        validate_positive_number(
            "services.review.port",
            u64::from(self.services.review.port),
            1,
        )?;
        validate_positive_number("gateway.timeout_seconds", self.request_timeout_seconds(), 1)?;
        Ok(())
    }
}
