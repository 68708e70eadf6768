use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::{CatalogError, CatalogQuery, ProductCatalog};
use super::domain::{Product, ProductId, Recommendation, RecommendationEnvelope, UserProfile};
use super::explanation;
use super::validation::{RecommendationRequest, ValidationError};

/// Service composing validation, the catalog query, and explanation generation.
pub struct RecommendationService<C> {
    catalog: Arc<C>,
}

impl<C> Clone for RecommendationService<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C> RecommendationService<C>
where
    C: ProductCatalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Validate raw request fields, then recommend.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationEnvelope, RecommendationError> {
        let profile = request.validate()?;
        let recommendation = self.recommend_for(&profile).await?;
        Ok(RecommendationEnvelope { recommendation })
    }

    /// Ranked eligible products for an already validated profile.
    pub async fn candidates(&self, profile: &UserProfile) -> Result<Vec<Product>, CatalogError> {
        let query = CatalogQuery::for_profile(profile);
        self.catalog.recommend(&query).await
    }

    pub async fn recommend_for(
        &self,
        profile: &UserProfile,
    ) -> Result<Recommendation, RecommendationError> {
        let candidates = self.candidates(profile).await?;
        let candidate_count = candidates.len();

        let Some(product) = candidates.into_iter().next() else {
            info!(
                age = profile.age,
                risk_tolerance = profile.risk_tolerance.label(),
                "no eligible products for profile"
            );
            return Err(RecommendationError::NoEligibleProducts);
        };

        let copy = explanation::explain(&product, profile);
        debug!(
            product_id = %product.id,
            product_type = %product.product_type,
            candidate_count,
            risk_tolerance = profile.risk_tolerance.label(),
            "selected recommendation"
        );

        Ok(Recommendation {
            product,
            title: copy.title,
            explanation: copy.explanation,
        })
    }

    pub async fn product(&self, id: &ProductId) -> Result<Product, RecommendationError> {
        self.catalog
            .get(id)
            .await?
            .ok_or_else(|| RecommendationError::ProductNotFound(id.clone()))
    }

    pub async fn products(&self) -> Result<Vec<Product>, RecommendationError> {
        Ok(self.catalog.all().await?)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No suitable products found for the given user details.")]
    NoEligibleProducts,
    #[error("product '{0}' not found")]
    ProductNotFound(ProductId),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
