use super::super::domain::{Product, ProductType, RiskTolerance, UserProfile};
use super::format::{one_decimal, plain_amount, share_of_monthly_income};

/// Base income multiple behind the "recommended protection level" heuristic.
/// Tuned separately from the eligibility coverage floor.
pub const RECOMMENDED_COVERAGE_BASE_MULTIPLE: u64 = 5;
pub const RECOMMENDED_COVERAGE_PER_DEPENDENT: u64 = 2;
/// Fraction of the recommended coverage that counts as meeting it.
pub const RECOMMENDED_COVERAGE_TOLERANCE: f64 = 0.8;

const CONSERVATIVE_PREMIUM_CEILING: f64 = 100.0;
const AGGRESSIVE_COVERAGE_FLOOR: f64 = 200_000.0;

pub const FALLBACK_CLAUSE: &str =
    "this product offers the best balance of coverage and affordability for your profile";

/// Inputs visible to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub product: &'a Product,
    pub profile: &'a UserProfile,
}

impl RuleContext<'_> {
    fn is(&self, product_type: ProductType) -> bool {
        self.product.product_type == product_type
    }

    pub fn recommended_coverage(&self) -> f64 {
        let multiple = RECOMMENDED_COVERAGE_BASE_MULTIPLE
            + u64::from(self.profile.number_of_dependents) * RECOMMENDED_COVERAGE_PER_DEPENDENT;
        self.profile.income as f64 * multiple as f64
    }
}

/// Which justification a rule contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    YoungHealth,
    MidCareerLife,
    LaterLifeLife,
    DependentsLife,
    PremiumShare,
    ConservativeAffordability,
    AggressiveCoverage,
    RecommendedProtection,
}

/// Predicate paired with the clause it contributes.
pub struct ExplanationRule {
    pub kind: RuleKind,
    applies: fn(&RuleContext<'_>) -> bool,
    clause: fn(&RuleContext<'_>) -> String,
}

impl ExplanationRule {
    pub fn applies(&self, context: &RuleContext<'_>) -> bool {
        (self.applies)(context)
    }

    pub fn clause(&self, context: &RuleContext<'_>) -> String {
        (self.clause)(context)
    }
}

/// Rules in the order their clauses appear in the explanation.
pub static RULES: [ExplanationRule; 8] = [
    ExplanationRule {
        kind: RuleKind::YoungHealth,
        applies: |ctx| ctx.profile.age < 30 && ctx.is(ProductType::Health),
        clause: |_| "health insurance is essential for young professionals".to_string(),
    },
    ExplanationRule {
        kind: RuleKind::MidCareerLife,
        applies: |ctx| (30..50).contains(&ctx.profile.age) && ctx.is(ProductType::Life),
        clause: |_| {
            "life insurance becomes crucial as you build your career and family".to_string()
        },
    },
    ExplanationRule {
        kind: RuleKind::LaterLifeLife,
        applies: |ctx| ctx.profile.age >= 50 && ctx.is(ProductType::Life),
        clause: |_| {
            "comprehensive life coverage is important for protecting your family's future"
                .to_string()
        },
    },
    ExplanationRule {
        kind: RuleKind::DependentsLife,
        applies: |ctx| ctx.profile.has_dependents() && ctx.is(ProductType::Life),
        clause: |ctx| {
            format!(
                "with {} dependent(s), this provides essential financial security",
                ctx.profile.number_of_dependents
            )
        },
    },
    ExplanationRule {
        kind: RuleKind::PremiumShare,
        applies: |_| true,
        clause: |ctx| {
            let share =
                share_of_monthly_income(ctx.product.premium, ctx.profile.monthly_income());
            format!(
                "the premium of ${}/month represents only {}% of your monthly income",
                plain_amount(ctx.product.premium),
                one_decimal(share)
            )
        },
    },
    ExplanationRule {
        kind: RuleKind::ConservativeAffordability,
        applies: |ctx| {
            ctx.profile.risk_tolerance == RiskTolerance::Low
                && ctx.product.premium < CONSERVATIVE_PREMIUM_CEILING
        },
        clause: |_| {
            "this affordable option aligns with your conservative approach to financial planning"
                .to_string()
        },
    },
    ExplanationRule {
        kind: RuleKind::AggressiveCoverage,
        applies: |ctx| {
            ctx.profile.risk_tolerance == RiskTolerance::High
                && ctx.product.coverage_amount > AGGRESSIVE_COVERAGE_FLOOR
        },
        clause: |_| {
            "this higher coverage option matches your willingness to invest in comprehensive protection"
                .to_string()
        },
    },
    ExplanationRule {
        kind: RuleKind::RecommendedProtection,
        applies: |ctx| {
            ctx.product.coverage_amount
                >= ctx.recommended_coverage() * RECOMMENDED_COVERAGE_TOLERANCE
        },
        clause: |_| {
            "this coverage amount meets our recommended protection level for your situation"
                .to_string()
        },
    },
];

/// Evaluate every rule in order, returning the kinds that fired and their clauses.
pub fn evaluate(context: &RuleContext<'_>) -> Vec<(RuleKind, String)> {
    RULES
        .iter()
        .filter(|rule| rule.applies(context))
        .map(|rule| (rule.kind, rule.clause(context)))
        .collect()
}
