use crate::core::composite::CompositeGateway;
use crate::domain::model::{Product, Recommendation, Review};
use crate::domain::ports::{ProductGateway, RecommendationGateway, ReviewGateway};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Aggregate response for one product: the product itself plus whatever
/// enrichment the auxiliary services could deliver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product: Product,
    pub recommendations: Vec<Recommendation>,
    pub reviews: Vec<Review>,
}

/// Assembles `ProductView`s one level above the facade. The facade itself
/// only dispatches; the cross-entity join happens here.
pub struct ViewService<P, R, V> {
    gateway: CompositeGateway<P, R, V>,
}

impl<P, R, V> ViewService<P, R, V>
where
    P: ProductGateway,
    R: RecommendationGateway,
    V: ReviewGateway,
{
    pub fn new(gateway: CompositeGateway<P, R, V>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &CompositeGateway<P, R, V> {
        &self.gateway
    }

    /// Fans out the three reads concurrently. The auxiliary reads degrade
    /// inside their gateways, so the only failure that can abort the join is
    /// the product call (or local id validation). An abort drops the other
    /// in-flight futures, which cancels their requests; dropping the whole
    /// view future does the same for all three.
    pub async fn get_product_view(&self, product_id: i32) -> Result<ProductView> {
        tracing::debug!("Assembling composite view for product id: {}", product_id);

        let (product, recommendations, reviews) = tokio::try_join!(
            self.gateway.get_product(product_id),
            self.gateway.get_recommendations(product_id),
            self.gateway.get_reviews(product_id),
        )?;

        tracing::info!(
            "Composite view for product {}: {} recommendations, {} reviews",
            product_id,
            recommendations.len(),
            reviews.len()
        );

        Ok(ProductView {
            product,
            recommendations,
            reviews,
        })
    }
}
