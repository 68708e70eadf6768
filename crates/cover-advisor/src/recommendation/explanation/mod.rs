//! Title and prose justification for a selected product.
//!
//! The explanation is assembled from an ordered rule list (see [`rules::RULES`]); each rule whose
//! predicate holds contributes one clause, and the clauses are joined into a single sentence.

mod format;
pub mod rules;

pub use format::{grouped_amount, plain_amount, share_of_monthly_income};
pub use rules::{RuleContext, RuleKind, FALLBACK_CLAUSE};

use super::domain::{Product, ProductType, UserProfile};

/// Generated copy for a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub title: String,
    pub explanation: String,
}

/// `"{name} – ${amount} {descriptor}"`, descriptor chosen by product line.
pub fn title(product: &Product) -> String {
    let amount = grouped_amount(product.coverage_amount);
    let descriptor = match product.product_type {
        ProductType::Life => format!("for {} years", product.term),
        ProductType::Home => "property coverage".to_string(),
        ProductType::Health | ProductType::Auto | ProductType::Other(_) => "coverage".to_string(),
    };
    format!("{} – ${amount} {descriptor}", product.name)
}

/// Sentence justifying `product` for `profile`. Always non-empty and period-terminated.
pub fn justification(product: &Product, profile: &UserProfile) -> String {
    let context = RuleContext { product, profile };
    let fired = rules::evaluate(&context);

    let only_premium_share = fired.iter().all(|(kind, _)| *kind == RuleKind::PremiumShare);
    let mut clauses: Vec<String> = fired.into_iter().map(|(_, clause)| clause).collect();
    if only_premium_share {
        clauses.push(FALLBACK_CLAUSE.to_string());
    }

    format!("We recommend this because {}.", clauses.join(", "))
}

pub fn explain(product: &Product, profile: &UserProfile) -> Explanation {
    Explanation {
        title: title(product),
        explanation: justification(product, profile),
    }
}
