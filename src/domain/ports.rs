use crate::domain::model::{Product, Recommendation, Review};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn get_product(&self, product_id: i32) -> Result<Product>;
    async fn create_product(&self, body: Product) -> Result<Product>;
    async fn delete_product(&self, product_id: i32) -> Result<()>;
}

#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    /// Degrades on downstream failure: an unreachable or erroring
    /// recommendation service yields an empty list, never an error.
    async fn get_recommendations(&self, product_id: i32) -> Result<Vec<Recommendation>>;
    async fn create_recommendation(&self, body: Recommendation) -> Result<Recommendation>;
    async fn delete_recommendations(&self, product_id: i32) -> Result<()>;
}

#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Degrades on downstream failure, like recommendation reads.
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>>;
    async fn create_review(&self, body: Review) -> Result<Review>;
    async fn delete_reviews(&self, product_id: i32) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn product_service_url(&self) -> String;
    fn recommendation_service_url(&self) -> String;
    fn review_service_url(&self) -> String;
    fn request_timeout_seconds(&self) -> u64;
}
