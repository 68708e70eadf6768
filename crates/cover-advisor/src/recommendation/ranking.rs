use std::cmp::Ordering;

use serde::Serialize;

use super::domain::{Product, ProductType, RiskTolerance, UserProfile};

/// Maximum number of ranked candidates handed back by a catalog query.
pub const CANDIDATE_LIMIT: usize = 8;

const PRIORITY_LIFE_WITH_DEPENDENTS: u8 = 1;
const PRIORITY_HEALTH: u8 = 2;
const PRIORITY_DEFAULT: u8 = 5;

/// Sort direction for the risk-driven keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

/// Numeric product attribute used as a ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Premium,
    CoverageAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    const fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    fn compare(&self, left: &Product, right: &Product) -> Ordering {
        let ordering = match self.field {
            SortField::Premium => left.premium.total_cmp(&right.premium),
            SortField::CoverageAmount => left.coverage_amount.total_cmp(&right.coverage_amount),
        };
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Comparator ordering eligible products for one profile.
///
/// Keys, in order: product-line priority, the two risk-tolerance keys, then
/// product id ascending so identical inputs always produce the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingOrder {
    pub life_has_priority: bool,
    pub keys: [SortKey; 2],
}

impl RankingOrder {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            life_has_priority: profile.has_dependents(),
            keys: Self::risk_keys(profile.risk_tolerance),
        }
    }

    pub fn risk_keys(risk_tolerance: RiskTolerance) -> [SortKey; 2] {
        use Direction::{Ascending, Descending};
        use SortField::{CoverageAmount, Premium};

        match risk_tolerance {
            RiskTolerance::Low => [
                SortKey::new(Premium, Ascending),
                SortKey::new(CoverageAmount, Descending),
            ],
            RiskTolerance::Medium => [
                SortKey::new(CoverageAmount, Descending),
                SortKey::new(Premium, Ascending),
            ],
            RiskTolerance::High => [
                SortKey::new(CoverageAmount, Descending),
                SortKey::new(Premium, Descending),
            ],
        }
    }

    /// Life products only outrank health when the household has dependents;
    /// otherwise they share the default bucket with every other line.
    pub fn type_priority(&self, product_type: &ProductType) -> u8 {
        match product_type {
            ProductType::Life if self.life_has_priority => PRIORITY_LIFE_WITH_DEPENDENTS,
            ProductType::Health => PRIORITY_HEALTH,
            _ => PRIORITY_DEFAULT,
        }
    }

    pub fn compare(&self, left: &Product, right: &Product) -> Ordering {
        self.type_priority(&left.product_type)
            .cmp(&self.type_priority(&right.product_type))
            .then_with(|| self.keys[0].compare(left, right))
            .then_with(|| self.keys[1].compare(left, right))
            .then_with(|| left.id.cmp(&right.id))
    }

    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|left, right| self.compare(left, right));
    }

    /// Sort and cap to [`CANDIDATE_LIMIT`].
    pub fn rank(&self, mut products: Vec<Product>) -> Vec<Product> {
        self.sort(&mut products);
        products.truncate(CANDIDATE_LIMIT);
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(number_of_dependents: u32, risk_tolerance: RiskTolerance) -> UserProfile {
        UserProfile {
            age: 35,
            income: 80000,
            number_of_dependents,
            risk_tolerance,
        }
    }

    #[test]
    fn life_priority_depends_on_dependents() {
        let with_family = RankingOrder::for_profile(&profile(1, RiskTolerance::Low));
        let single = RankingOrder::for_profile(&profile(0, RiskTolerance::Low));

        assert_eq!(with_family.type_priority(&ProductType::Life), 1);
        assert_eq!(single.type_priority(&ProductType::Life), 5);
        assert_eq!(single.type_priority(&ProductType::Health), 2);
        assert_eq!(single.type_priority(&ProductType::Home), 5);
    }

    #[test]
    fn risk_keys_match_tolerance() {
        let high = RankingOrder::risk_keys(RiskTolerance::High);
        assert_eq!(high[0].field, SortField::CoverageAmount);
        assert_eq!(high[0].direction, Direction::Descending);
        assert_eq!(high[1].field, SortField::Premium);
        assert_eq!(high[1].direction, Direction::Descending);

        let low = RankingOrder::risk_keys(RiskTolerance::Low);
        assert_eq!(low[0].field, SortField::Premium);
        assert_eq!(low[0].direction, Direction::Ascending);
    }
}
