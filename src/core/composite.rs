use crate::core::client::DownstreamClient;
use crate::core::product::ProductClient;
use crate::core::recommendation::RecommendationClient;
use crate::core::review::ReviewClient;
use crate::domain::model::{Product, Recommendation, Review};
use crate::domain::ports::{
    ConfigProvider, ProductGateway, RecommendationGateway, ReviewGateway,
};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Facade over the three entity gateways. Holds one instance of each,
/// constructed once with immutable downstream addresses, and exposes the
/// union of their operations by plain delegation. Aggregation across
/// entities lives one level above, in `app::view`.
pub struct CompositeGateway<P, R, V> {
    products: P,
    recommendations: R,
    reviews: V,
}

impl<P, R, V> CompositeGateway<P, R, V>
where
    P: ProductGateway,
    R: RecommendationGateway,
    V: ReviewGateway,
{
    pub fn new(products: P, recommendations: R, reviews: V) -> Self {
        Self {
            products,
            recommendations,
            reviews,
        }
    }

    pub async fn get_product(&self, product_id: i32) -> Result<Product> {
        self.products.get_product(product_id).await
    }

    pub async fn create_product(&self, body: Product) -> Result<Product> {
        self.products.create_product(body).await
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<()> {
        self.products.delete_product(product_id).await
    }

    pub async fn get_recommendations(&self, product_id: i32) -> Result<Vec<Recommendation>> {
        self.recommendations.get_recommendations(product_id).await
    }

    pub async fn create_recommendation(&self, body: Recommendation) -> Result<Recommendation> {
        self.recommendations.create_recommendation(body).await
    }

    pub async fn delete_recommendations(&self, product_id: i32) -> Result<()> {
        self.recommendations.delete_recommendations(product_id).await
    }

    pub async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>> {
        self.reviews.get_reviews(product_id).await
    }

    pub async fn create_review(&self, body: Review) -> Result<Review> {
        self.reviews.create_review(body).await
    }

    pub async fn delete_reviews(&self, product_id: i32) -> Result<()> {
        self.reviews.delete_reviews(product_id).await
    }
}

impl CompositeGateway<ProductClient, RecommendationClient, ReviewClient> {
    /// Wires the three concrete gateways from configured addresses. The
    /// reqwest client is cloned, not rebuilt, so all gateways share one
    /// connection pool.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let http = Client::new();
        let timeout = Duration::from_secs(config.request_timeout_seconds());

        Self::new(
            ProductClient::new(DownstreamClient::new(
                "product",
                config.product_service_url(),
                http.clone(),
                timeout,
            )),
            RecommendationClient::new(DownstreamClient::new(
                "recommendation",
                config.recommendation_service_url(),
                http.clone(),
                timeout,
            )),
            ReviewClient::new(DownstreamClient::new(
                "review",
                config.review_service_url(),
                http,
                timeout,
            )),
        )
    }
}
