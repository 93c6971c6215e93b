pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::view::{ProductView, ViewService};
pub use crate::core::composite::CompositeGateway;
pub use domain::model::{Product, Recommendation, Review};
pub use domain::ports::{
    ConfigProvider, ProductGateway, RecommendationGateway, ReviewGateway,
};
pub use utils::error::{GatewayError, Result};
