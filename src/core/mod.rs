pub mod client;
pub mod composite;
pub mod product;
pub mod recommendation;
pub mod review;
pub mod translate;

pub use crate::domain::model::{Product, Recommendation, Review};
pub use crate::domain::ports::{
    ConfigProvider, ProductGateway, RecommendationGateway, ReviewGateway,
};
pub use crate::utils::error::Result;
