//! Product catalog store boundary.
//!
//! The recommendation service only sees [`ProductCatalog`]; adapters decide how products are
//! stored. The query carries the structural constraints and sort specification so a backing
//! store can evaluate filter and rank in one pass.

mod memory;
mod seed;

pub use memory::InMemoryCatalog;
pub use seed::{load_products, load_products_from_reader, CatalogLoadError};

use async_trait::async_trait;
use serde::Serialize;

use super::domain::{Product, ProductId, UserProfile};
use super::eligibility::EligibilityCriteria;
use super::ranking::{RankingOrder, CANDIDATE_LIMIT};

/// Combined filter + rank request sent to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogQuery {
    pub criteria: EligibilityCriteria,
    pub order: RankingOrder,
    pub limit: usize,
}

impl CatalogQuery {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            criteria: EligibilityCriteria::for_profile(profile),
            order: RankingOrder::for_profile(profile),
            limit: CANDIDATE_LIMIT,
        }
    }

    /// Reference evaluation over an in-process product list.
    pub fn evaluate<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut candidates = self.criteria.filter(products);
        self.order.sort(&mut candidates);
        candidates.truncate(self.limit);
        candidates
    }
}

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Eligible products for the query, ranked and capped at `query.limit`.
    async fn recommend(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError>;
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;
    /// Every product, newest first.
    async fn all(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
