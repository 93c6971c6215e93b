pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Request timeout applied to every downstream call unless configured.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "composite-gateway")]
#[command(about = "Composite gateway over the product, recommendation and review services")]
pub struct CliConfig {
    #[arg(long, default_value = "localhost")]
    pub product_host: String,

    #[arg(long, default_value = "7001")]
    pub product_port: u16,

    #[arg(long, default_value = "localhost")]
    pub recommendation_host: String,

    #[arg(long, default_value = "7002")]
    pub recommendation_port: u16,

    #[arg(long, default_value = "localhost")]
    pub review_host: String,

    #[arg(long, default_value = "7003")]
    pub review_port: u16,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "1", help = "Product id to look up")]
    pub product_id: i32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn product_service_url(&self) -> String {
        format!("http://{}:{}", self.product_host, self.product_port)
    }

    fn recommendation_service_url(&self) -> String {
        format!("http://{}:{}", self.recommendation_host, self.recommendation_port)
    }

    fn review_service_url(&self) -> String {
        format!("http://{}:{}", self.review_host, self.review_port)
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("product_host", &self.product_host)?;
        validate_non_empty_string("recommendation_host", &self.recommendation_host)?;
        validate_non_empty_string("review_host", &self.review_host)?;
        validate_positive_number("product_port", u64::from(self.product_port), 1)?;
        validate_positive_number("recommendation_port", u64::from(self.recommendation_port), 1)?;
        validate_positive_number("review_port", u64::from(self.review_port), 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
