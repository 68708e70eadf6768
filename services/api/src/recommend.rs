use crate::infra::load_catalog;
use clap::{Args, ValueEnum};
use cover_advisor::config::AppConfig;
use cover_advisor::error::AppError;
use cover_advisor::recommendation::{
    RecommendationEnvelope, RecommendationService, RiskTolerance, UserProfile,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RiskToleranceArg {
    Low,
    Medium,
    High,
}

impl From<RiskToleranceArg> for RiskTolerance {
    fn from(value: RiskToleranceArg) -> Self {
        match value {
            RiskToleranceArg::Low => RiskTolerance::Low,
            RiskToleranceArg::Medium => RiskTolerance::Medium,
            RiskToleranceArg::High => RiskTolerance::High,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Applicant age in years (minimum 7)
    #[arg(long, value_parser = clap::value_parser!(u32).range(7..))]
    pub(crate) age: u32,
    /// Annual income
    #[arg(long)]
    pub(crate) income: u64,
    /// Number of financial dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u32,
    /// Declared risk tolerance
    #[arg(long, value_enum)]
    pub(crate) risk_tolerance: RiskToleranceArg,
    /// Product catalog CSV (defaults to CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl RecommendArgs {
    fn profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            income: self.income,
            number_of_dependents: self.dependents,
            risk_tolerance: self.risk_tolerance.into(),
        }
    }
}

pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog_path = match &args.catalog {
        Some(path) => path.clone(),
        None => AppConfig::load()?.catalog.path,
    };

    let catalog = Arc::new(load_catalog(&catalog_path)?);
    let service = RecommendationService::new(catalog);
    let recommendation = service.recommend_for(&args.profile()).await?;

    let rendered = serde_json::to_string_pretty(&RecommendationEnvelope { recommendation })
        .map_err(|err| AppError::Io(err.into()))?;
    println!("{rendered}");
    Ok(())
}
