use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{CatalogError, CatalogQuery, ProductCatalog};
use crate::recommendation::domain::{Product, ProductId};

/// Immutable product snapshot shared across requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Arc<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for InMemoryCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn recommend(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        let candidates = query.evaluate(self.products.iter());
        debug!(
            catalog_size = self.products.len(),
            candidates = candidates.len(),
            "evaluated catalog query"
        );
        Ok(candidates)
    }

    async fn get(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.iter().find(|product| &product.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.products.to_vec();
        products.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| left.id.cmp(&right.id))
        });
        Ok(products)
    }
}
