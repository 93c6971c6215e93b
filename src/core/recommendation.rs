use crate::core::client::DownstreamClient;
use crate::core::translate::translate;
use crate::domain::model::Recommendation;
use crate::domain::ports::RecommendationGateway;
use crate::utils::error::Result;
use crate::utils::validation::validate_product_id;
use async_trait::async_trait;

/// Gateway to the recommendation service. Recommendations are auxiliary
/// enrichment: reads degrade to an empty list on any downstream failure,
/// while writes and deletes stay fatal so a failed mutation is never hidden.
pub struct RecommendationClient {
    client: DownstreamClient,
}

impl RecommendationClient {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecommendationGateway for RecommendationClient {
    async fn get_recommendations(&self, product_id: i32) -> Result<Vec<Recommendation>> {
        validate_product_id(product_id)?;

        match self
            .client
            .get_json::<Vec<Recommendation>>(
                "/recommendation",
                &[("productId", product_id.to_string())],
            )
            .await
        {
            Ok(recommendations) => {
                tracing::info!(
                    "Found {} recommendations for product with id: {}",
                    recommendations.len(),
                    product_id
                );
                Ok(recommendations)
            }
            Err(failure) => {
                let err = translate(self.client.service(), failure);
                tracing::warn!(
                    "Got a failure while requesting recommendations, returning zero recommendations: {}",
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    async fn create_recommendation(&self, body: Recommendation) -> Result<Recommendation> {
        validate_product_id(body.product_id)?;

        let recommendation: Recommendation = self
            .client
            .post_json("/recommendation", &body)
            .await
            .map_err(|failure| translate(self.client.service(), failure))?;

        tracing::info!(
            "Created a recommendation: {}/{}",
            recommendation.product_id,
            recommendation.recommendation_id
        );
        Ok(recommendation)
    }

    async fn delete_recommendations(&self, product_id: i32) -> Result<()> {
        validate_product_id(product_id)?;
        tracing::debug!(
            "Deleting recommendations for product with id: {}",
            product_id
        );

        self.client
            .delete("/recommendation", &[("productId", product_id.to_string())])
            .await
            .map_err(|failure| translate(self.client.service(), failure))
    }
}
