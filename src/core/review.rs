use crate::core::client::DownstreamClient;
use crate::core::translate::translate;
use crate::domain::model::Review;
use crate::domain::ports::ReviewGateway;
use crate::utils::error::Result;
use crate::utils::validation::validate_product_id;
use async_trait::async_trait;

/// Gateway to the review service. Same policy split as recommendations:
/// reads degrade, mutations are fatal. A failed delete propagates like any
/// other write failure.
///
/// The review service addresses reads by path segment but deletes by query
/// parameter. Inherited wire contract, kept as-is.
pub struct ReviewClient {
    client: DownstreamClient,
}

impl ReviewClient {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewGateway for ReviewClient {
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>> {
        validate_product_id(product_id)?;

        match self
            .client
            .get_json::<Vec<Review>>(&format!("/review/{}", product_id), &[])
            .await
        {
            Ok(reviews) => {
                tracing::info!(
                    "Found {} reviews for product with id: {}",
                    reviews.len(),
                    product_id
                );
                Ok(reviews)
            }
            Err(failure) => {
                let err = translate(self.client.service(), failure);
                tracing::warn!(
                    "Got a failure while requesting reviews, returning zero reviews: {}",
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    async fn create_review(&self, body: Review) -> Result<Review> {
        validate_product_id(body.product_id)?;

        let review: Review = self
            .client
            .post_json("/review", &body)
            .await
            .map_err(|failure| translate(self.client.service(), failure))?;

        tracing::info!(
            "Created a review: {}/{}",
            review.product_id,
            review.review_id
        );
        Ok(review)
    }

    async fn delete_reviews(&self, product_id: i32) -> Result<()> {
        validate_product_id(product_id)?;
        tracing::debug!("Deleting reviews for product with id: {}", product_id);

        self.client
            .delete("/review", &[("productId", product_id.to_string())])
            .await
            .map_err(|failure| translate(self.client.service(), failure))
    }
}
