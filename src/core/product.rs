use crate::core::client::DownstreamClient;
use crate::core::translate::translate;
use crate::domain::model::Product;
use crate::domain::ports::ProductGateway;
use crate::utils::error::Result;
use crate::utils::validation::validate_product_id;
use async_trait::async_trait;

/// Gateway to the product service. The product is the load-bearing entity of
/// the composite view, so every failure here is fatal and propagates to the
/// caller after translation.
pub struct ProductClient {
    client: DownstreamClient,
}

impl ProductClient {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductGateway for ProductClient {
    async fn get_product(&self, product_id: i32) -> Result<Product> {
        validate_product_id(product_id)?;

        let product: Product = self
            .client
            .get_json(&format!("/product/{}", product_id), &[])
            .await
            .map_err(|failure| translate(self.client.service(), failure))?;

        tracing::info!("Found a product with id: {}", product.product_id);
        Ok(product)
    }

    async fn create_product(&self, body: Product) -> Result<Product> {
        validate_product_id(body.product_id)?;

        let product: Product = self
            .client
            .post_json("/product", &body)
            .await
            .map_err(|failure| translate(self.client.service(), failure))?;

        tracing::info!("Created a product with id: {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, product_id: i32) -> Result<()> {
        validate_product_id(product_id)?;
        tracing::debug!("Deleting product with id: {}", product_id);

        self.client
            .delete(&format!("/product/{}", product_id), &[])
            .await
            .map_err(|failure| translate(self.client.service(), failure))
    }
}
