use serde::Serialize;

use super::domain::{Product, ProductType, UserProfile};

/// Share of monthly income a premium may consume.
pub const MAX_PREMIUM_INCOME_SHARE: f64 = 0.10;
/// Base income multiple life coverage must reach before dependents are added.
pub const LIFE_COVERAGE_BASE_MULTIPLE: u64 = 2;

const UNDER_TWENTY_FIVE_TYPES: &[ProductType] = &[ProductType::Health, ProductType::Auto];
const TWENTY_FIVE_TO_THIRTY_NINE_TYPES: &[ProductType] = &[
    ProductType::Life,
    ProductType::Health,
    ProductType::Auto,
    ProductType::Home,
];
const FORTY_TO_FIFTY_NINE_TYPES: &[ProductType] =
    &[ProductType::Life, ProductType::Health, ProductType::Home];
const SIXTY_AND_OVER_TYPES: &[ProductType] = &[ProductType::Life, ProductType::Health];

/// Age brackets gating which product lines may be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    UnderTwentyFive,
    TwentyFiveToThirtyNine,
    FortyToFiftyNine,
    SixtyAndOver,
}

impl AgeBracket {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=24 => Self::UnderTwentyFive,
            25..=39 => Self::TwentyFiveToThirtyNine,
            40..=59 => Self::FortyToFiftyNine,
            _ => Self::SixtyAndOver,
        }
    }

    pub fn allowed_types(&self) -> &'static [ProductType] {
        match self {
            Self::UnderTwentyFive => UNDER_TWENTY_FIVE_TYPES,
            Self::TwentyFiveToThirtyNine => TWENTY_FIVE_TO_THIRTY_NINE_TYPES,
            Self::FortyToFiftyNine => FORTY_TO_FIFTY_NINE_TYPES,
            Self::SixtyAndOver => SIXTY_AND_OVER_TYPES,
        }
    }
}

/// Structural constraints a product must satisfy to be offered to a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityCriteria {
    pub bracket: AgeBracket,
    pub max_monthly_premium: f64,
    /// Applies to life products only.
    pub min_life_coverage: f64,
}

impl EligibilityCriteria {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let max_monthly_premium = profile.monthly_income() * MAX_PREMIUM_INCOME_SHARE;
        let min_life_coverage = profile.income as f64
            * (LIFE_COVERAGE_BASE_MULTIPLE + u64::from(profile.number_of_dependents)) as f64;

        Self {
            bracket: AgeBracket::for_age(profile.age),
            max_monthly_premium,
            min_life_coverage,
        }
    }

    pub fn allows_type(&self, product_type: &ProductType) -> bool {
        self.bracket.allowed_types().contains(product_type)
    }

    pub fn is_affordable(&self, product: &Product) -> bool {
        product.premium <= self.max_monthly_premium
    }

    pub fn has_adequate_coverage(&self, product: &Product) -> bool {
        !product.is_life() || product.coverage_amount >= self.min_life_coverage
    }

    pub fn admits(&self, product: &Product) -> bool {
        self.allows_type(&product.product_type)
            && self.is_affordable(product)
            && self.has_adequate_coverage(product)
    }

    /// Narrow `products` to the admitted subset, keeping input order.
    pub fn filter<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|product| self.admits(product))
            .cloned()
            .collect()
    }
}
