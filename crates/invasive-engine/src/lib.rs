mod aggregation;
mod defuzzify;
mod engine;
mod membership;
mod report;
mod symbolic;
mod weighting;


pub use aggregation::{
    aggregate_dispersal, aggregate_mis, aggregate_overall, hamacher_tnorm, ordered_weighted,
    DispersalOperator,
};
pub use defuzzify::{classify, defuzzify, level_bounds, RISK_THRESHOLDS, SCORE_MAX};
pub use engine::{EngineConfig, RiskEngine};
pub use membership::{
    apply_hedge, fuzzify, fuzzify_label, hedge_exponents, low_dispersal_membership,
    membership_to_fuzzy, validate_domain, FactorSpec, FactorValue,
};
pub use invasive_core::{adaptive_quantifier, Quantifier, QuantifierPolicy};
pub use report::{generate_report, AssessmentReport};
pub use symbolic::{lowa, lwa, EXPERT_IMPORTANCE};
pub use weighting::WeightingSchemes;
