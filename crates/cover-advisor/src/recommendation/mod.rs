//! Insurance product recommendation: validation gate, eligibility filter, ranking engine, and
//! explanation generator composed behind [`RecommendationService`].

pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod explanation;
pub mod ranking;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    load_products, load_products_from_reader, CatalogError, CatalogLoadError, CatalogQuery,
    InMemoryCatalog, ProductCatalog,
};
pub use domain::{
    Product, ProductId, ProductType, Recommendation, RecommendationEnvelope, RiskTolerance,
    UserProfile,
};
pub use eligibility::{AgeBracket, EligibilityCriteria};
pub use ranking::{RankingOrder, CANDIDATE_LIMIT};
pub use router::recommendation_router;
pub use service::{RecommendationError, RecommendationService};
pub use validation::{FieldError, RecommendationRequest, ValidationError};
