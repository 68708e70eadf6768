use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::recommendation::catalog::{CatalogError, CatalogQuery, InMemoryCatalog, ProductCatalog};
use crate::recommendation::domain::{
    Product, ProductId, ProductType, RiskTolerance, UserProfile,
};
use crate::recommendation::{recommendation_router, RecommendationService};

fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn product(
    id: &str,
    name: &str,
    product_type: ProductType,
    premium: f64,
    coverage_amount: f64,
    term: u32,
) -> Product {
    Product {
        id: ProductId(id.to_string()),
        name: name.to_string(),
        description: format!("{name} policy"),
        premium,
        term,
        coverage_amount,
        product_type,
        created_at: timestamp(1),
        updated_at: timestamp(1),
    }
}

pub(super) fn catalog_products() -> Vec<Product> {
    let mut products = vec![
        product("life-basic", "Term Life Basic", ProductType::Life, 45.5, 250_000.0, 20),
        product("life-family", "Family Protector Life", ProductType::Life, 120.0, 500_000.0, 30),
        product("life-premier", "Premier Life", ProductType::Life, 380.0, 1_000_000.0, 30),
        product("health-essential", "Health Essential", ProductType::Health, 85.0, 50_000.0, 1),
        product("health-plus", "Health Plus", ProductType::Health, 210.0, 150_000.0, 1),
        product("auto-standard", "Auto Standard", ProductType::Auto, 60.0, 30_000.0, 1),
        product("auto-full", "Auto Full Cover", ProductType::Auto, 140.0, 100_000.0, 1),
        product("home-shield", "Home Shield", ProductType::Home, 95.0, 300_000.0, 1),
        product(
            "pet-care",
            "Pet Care",
            ProductType::Other("pet".to_string()),
            20.0,
            5_000.0,
            1,
        ),
    ];
    for (offset, product) in products.iter_mut().enumerate() {
        product.created_at = timestamp(1 + offset as u32);
    }
    products
}

pub(super) fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(catalog_products())
}

pub(super) fn profile(
    age: u32,
    income: u64,
    number_of_dependents: u32,
    risk_tolerance: RiskTolerance,
) -> UserProfile {
    UserProfile {
        age,
        income,
        number_of_dependents,
        risk_tolerance,
    }
}

pub(super) fn build_service() -> RecommendationService<InMemoryCatalog> {
    RecommendationService::new(Arc::new(catalog()))
}

pub(super) fn router_with_service<C>(service: RecommendationService<C>) -> axum::Router
where
    C: ProductCatalog + 'static,
{
    recommendation_router(Arc::new(service))
}

pub(super) fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|product| product.id.0.as_str()).collect()
}

pub(super) struct UnavailableCatalog;

#[async_trait]
impl ProductCatalog for UnavailableCatalog {
    async fn recommend(&self, _query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    async fn get(&self, _id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    async fn all(&self) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
