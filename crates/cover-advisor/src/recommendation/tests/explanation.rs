use super::common::*;
use crate::recommendation::domain::{ProductType, RiskTolerance};
use crate::recommendation::explanation::{explain, justification, title, FALLBACK_CLAUSE};

#[test]
fn titles_vary_by_product_line() {
    let life = product("l", "Premier Life", ProductType::Life, 380.0, 1_000_000.0, 30);
    let health = product("h", "Health Plus", ProductType::Health, 210.0, 150_000.0, 1);
    let auto = product("a", "Auto Full Cover", ProductType::Auto, 140.0, 100_000.0, 1);
    let home = product("o", "Home Shield", ProductType::Home, 95.0, 300_000.0, 1);
    let pet = product(
        "p",
        "Pet Care",
        ProductType::Other("pet".to_string()),
        20.0,
        5_000.0,
        1,
    );

    assert_eq!(title(&life), "Premier Life – $1,000,000 for 30 years");
    assert_eq!(title(&health), "Health Plus – $150,000 coverage");
    assert_eq!(title(&auto), "Auto Full Cover – $100,000 coverage");
    assert_eq!(title(&home), "Home Shield – $300,000 property coverage");
    assert_eq!(title(&pet), "Pet Care – $5,000 coverage");
}

#[test]
fn young_health_buyer_gets_health_clause() {
    let product = product("h", "Health Plus", ProductType::Health, 210.0, 150_000.0, 1);
    let text = justification(&product, &profile(22, 35_000, 2, RiskTolerance::Medium));

    assert_eq!(
        text,
        "We recommend this because health insurance is essential for young professionals, \
         the premium of $210/month represents only 7.2% of your monthly income."
    );
}

#[test]
fn family_life_policy_collects_every_matching_clause() {
    let product = product("l", "Premier Life", ProductType::Life, 380.0, 1_000_000.0, 30);
    let text = justification(&product, &profile(35, 60_000, 2, RiskTolerance::High));

    assert_eq!(
        text,
        "We recommend this because life insurance becomes crucial as you build your career and family, \
         with 2 dependent(s), this provides essential financial security, \
         the premium of $380/month represents only 7.6% of your monthly income, \
         this higher coverage option matches your willingness to invest in comprehensive protection, \
         this coverage amount meets our recommended protection level for your situation."
    );
}

#[test]
fn later_life_clause_applies_from_fifty() {
    let product = product("l", "Term Life Basic", ProductType::Life, 45.5, 250_000.0, 20);
    let text = justification(&product, &profile(50, 40_000, 0, RiskTolerance::Low));

    assert!(text.contains("comprehensive life coverage is important for protecting your family's future"));
    assert!(text.contains("the premium of $45.5/month represents only 1.4% of your monthly income"));
    assert!(text.contains("aligns with your conservative approach"));
    assert!(!text.contains("dependent(s)"));
    assert!(!text.contains(FALLBACK_CLAUSE));
}

#[test]
fn fallback_is_added_when_only_the_premium_clause_fires() {
    let product = product("h", "Health Plus", ProductType::Health, 210.0, 150_000.0, 1);
    let text = justification(&product, &profile(35, 60_000, 0, RiskTolerance::Medium));

    assert_eq!(
        text,
        format!(
            "We recommend this because the premium of $210/month represents only 4.2% of your monthly income, {FALLBACK_CLAUSE}."
        )
    );
}

#[test]
fn explanation_always_reports_income_share() {
    for product in catalog_products() {
        for risk_tolerance in [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High] {
            let copy = explain(&product, &profile(41, 75_000, 1, risk_tolerance));
            assert!(copy.explanation.ends_with('.'));
            assert!(copy.explanation.contains("% of your monthly income"));
            assert!(copy.title.starts_with(&product.name));
        }
    }
}

#[test]
fn zero_income_reports_zero_share() {
    let product = product("free", "Starter Health", ProductType::Health, 0.0, 1_000.0, 1);
    let text = justification(&product, &profile(20, 0, 0, RiskTolerance::Medium));

    assert!(text.contains("the premium of $0/month represents only 0.0% of your monthly income"));
}

#[test]
fn income_share_ties_round_up() {
    let health = product("h", "Health Plus", ProductType::Health, 125.0, 150_000.0, 1);
    let text = justification(&health, &profile(35, 120_000, 0, RiskTolerance::Medium));
    assert!(text.contains("the premium of $125/month represents only 1.3% of your monthly income"));

    let starter = product("s", "Starter Health", ProductType::Health, 25.0, 10_000.0, 1);
    let text = justification(&starter, &profile(35, 120_000, 0, RiskTolerance::Medium));
    assert!(text.contains("the premium of $25/month represents only 0.3% of your monthly income"));
}
