use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared appetite for trading premium cost against coverage size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Validated per-request applicant snapshot. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    /// Annual income.
    pub income: u64,
    pub number_of_dependents: u32,
    pub risk_tolerance: RiskTolerance,
}

impl UserProfile {
    pub fn has_dependents(&self) -> bool {
        self.number_of_dependents > 0
    }

    pub fn monthly_income(&self) -> f64 {
        self.income as f64 / 12.0
    }
}

/// Product line. The catalog stores this as free text, so unknown lines are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Life,
    Health,
    Auto,
    Home,
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Life => "life",
            Self::Health => "health",
            Self::Auto => "auto",
            Self::Home => "home",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "life" => Self::Life,
            "health" => Self::Health,
            "auto" => Self::Auto,
            "home" => Self::Home,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ProductType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ProductType> for String {
    fn from(value: ProductType) -> Self {
        match value {
            ProductType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Monthly premium.
    pub premium: f64,
    /// Term in years.
    pub term: u32,
    pub coverage_amount: f64,
    pub product_type: ProductType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_life(&self) -> bool {
        self.product_type == ProductType::Life
    }
}

/// Selected product together with its generated title and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    pub title: String,
    pub explanation: String,
}

/// Response envelope returned by the HTTP surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEnvelope {
    pub recommendation: Recommendation,
}
