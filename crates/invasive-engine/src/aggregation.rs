//! Linguistic aggregation of fuzzy factor scores.
//!
//! Ordered aggregation sorts its arguments by severity and derives order
//! weights from a RIM quantifier and the arguments' importances:
//! `w_i = Q(P_i) - Q(P_{i-1})`, `P_i` being the cumulative importance of the
//! `i` most severe arguments. With `Quantifier::Mean` this reduces to the
//! position-wise weighted mean.

use invasive_core::{
    FuzzyNumber, LinguisticScale, MainFactor, MainFactorScores, Quantifier, RiskError,
    RiskResult, WeightVector, TERM_COUNT,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispersalOperator {
    /// Hamacher intersection of the "low dispersal" memberships, complemented.
    Hamacher { p: f64 },
    /// Unweighted ordered aggregation of the sub-factor fuzzy numbers.
    Ordered { quantifier: Quantifier },
}

impl DispersalOperator {
    pub fn validate(&self) -> RiskResult<()> {
        match self {
            DispersalOperator::Hamacher { p } if !p.is_finite() || *p < 0.0 => Err(
                RiskError::Configuration(format!("hamacher parameter {p} must be >= 0")),
            ),
            DispersalOperator::Hamacher { .. } => Ok(()),
            DispersalOperator::Ordered { quantifier } => quantifier.validate(),
        }
    }
}

impl Default for DispersalOperator {
    fn default() -> Self {
        DispersalOperator::Hamacher { p: 0.5 }
    }
}

pub fn hamacher_tnorm(a: f64, b: f64, p: f64) -> f64 {
    let den = p + (1.0 - p) * (a + b - a * b);
    if den <= f64::EPSILON {
        return 0.0;
    }
    (a * b / den).clamp(0.0, 1.0)
}

/// Ordered weighted aggregation of `(fuzzy number, importance)` pairs.
pub fn ordered_weighted(
    inputs: &[(FuzzyNumber, f64)],
    quantifier: &Quantifier,
) -> RiskResult<FuzzyNumber> {
    if inputs.is_empty() {
        return Err(RiskError::DegenerateAggregation { mass: 0.0 });
    }
    let total: f64 = inputs.iter().map(|(_, p)| p).sum();
    if total.is_nan() || total <= 0.0 {
        return Err(RiskError::DegenerateAggregation { mass: total });
    }

    let mut ranked = Vec::with_capacity(inputs.len());
    for (fuzzy, importance) in inputs {
        let severity = fuzzy
            .centroid()
            .ok_or(RiskError::DegenerateAggregation { mass: fuzzy.mass() })?;
        ranked.push((severity, *importance, fuzzy));
    }
    // Stable: equally severe arguments keep their factor order.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut degrees = [0.0; TERM_COUNT];
    let mut cumulative = 0.0;
    for (_, importance, fuzzy) in &ranked {
        let before = quantifier.evaluate(cumulative / total);
        cumulative += importance;
        let weight = quantifier.evaluate(cumulative / total) - before;
        for (out, d) in degrees.iter_mut().zip(fuzzy.degrees()) {
            *out += weight * d;
        }
    }

    let combined = FuzzyNumber::saturating(degrees);
    Ok(combined.normalized().unwrap_or(combined))
}

/// Combine the SF, ASR, VIA and LDD fuzzy numbers into the Dispersal score.
pub fn aggregate_dispersal(
    sub_factors: &[FuzzyNumber; 4],
    operator: &DispersalOperator,
    scale: &LinguisticScale,
) -> RiskResult<FuzzyNumber> {
    match operator {
        DispersalOperator::Hamacher { p } => {
            let mut intersection = 1.0;
            for fuzzy in sub_factors {
                let risk = scale
                    .crisp_value(fuzzy)
                    .ok_or(RiskError::DegenerateAggregation { mass: fuzzy.mass() })?;
                intersection = hamacher_tnorm(intersection, 1.0 - risk, *p);
            }
            debug!(intersection, "hamacher dispersal intersection");
            scale.fuzzify_unit(1.0 - intersection)
        }
        DispersalOperator::Ordered { quantifier } => {
            let inputs = sub_factors.map(|f| (f, 1.0));
            ordered_weighted(&inputs, quantifier)
        }
    }
}

/// MIS from human activity and disturbance, always with the mean quantifier.
pub fn aggregate_mis(ha: &FuzzyNumber, nmd: &FuzzyNumber) -> RiskResult<FuzzyNumber> {
    ordered_weighted(&[(*ha, 1.0), (*nmd, 1.0)], &Quantifier::Mean)
}

pub fn aggregate_overall(
    main_factors: &MainFactorScores,
    weights: &WeightVector,
    quantifier: &Quantifier,
) -> RiskResult<FuzzyNumber> {
    let inputs = MainFactor::ALL.map(|f| (*main_factors.get(f), weights.get(f)));
    ordered_weighted(&inputs, quantifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invasive_core::LinguisticTerm;

    #[test]
    fn hamacher_identity_and_annihilator() {
        for x in [0.0, 0.2, 0.7, 1.0] {
            assert!((hamacher_tnorm(x, 1.0, 0.5) - x).abs() < 1e-12);
            assert_eq!(hamacher_tnorm(x, 0.0, 0.5), 0.0);
        }
        assert_eq!(hamacher_tnorm(0.0, 0.0, 0.0), 0.0);
        assert!((hamacher_tnorm(0.5, 0.5, 1.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn mean_ordered_aggregation_is_positionwise_mean() {
        let low = FuzzyNumber::one_hot(LinguisticTerm::Low);
        let high = FuzzyNumber::one_hot(LinguisticTerm::High);
        let mis = aggregate_mis(&low, &high).unwrap();
        assert!((mis.degree(LinguisticTerm::Low) - 0.5).abs() < 1e-12);
        assert!((mis.degree(LinguisticTerm::High) - 0.5).abs() < 1e-12);
        assert_eq!(mis.dominant_term(), LinguisticTerm::High);
    }

    #[test]
    fn at_least_half_favours_the_most_severe_arguments() {
        let terms = [
            LinguisticTerm::Unlikely,
            LinguisticTerm::VeryHigh,
            LinguisticTerm::Low,
            LinguisticTerm::ExtremelyHigh,
        ];
        let inputs = terms.map(|t| (FuzzyNumber::one_hot(t), 1.0));
        let out = ordered_weighted(&inputs, &Quantifier::AtLeastHalf).unwrap();
        assert!((out.degree(LinguisticTerm::ExtremelyHigh) - 0.5).abs() < 1e-12);
        assert!((out.degree(LinguisticTerm::VeryHigh) - 0.5).abs() < 1e-12);
        assert_eq!(out.degree(LinguisticTerm::Unlikely), 0.0);
    }

    #[test]
    fn empty_or_massless_inputs_are_degenerate() {
        assert!(matches!(
            ordered_weighted(&[], &Quantifier::Mean),
            Err(RiskError::DegenerateAggregation { .. })
        ));
        assert!(matches!(
            ordered_weighted(&[(FuzzyNumber::zero(), 1.0)], &Quantifier::Mean),
            Err(RiskError::DegenerateAggregation { .. })
        ));
    }

    #[test]
    fn operator_validation() {
        assert!(DispersalOperator::Hamacher { p: -0.1 }.validate().is_err());
        assert!(DispersalOperator::Hamacher { p: 0.0 }.validate().is_ok());
        let bad = DispersalOperator::Ordered {
            quantifier: Quantifier::Custom { a: 0.9, b: 0.1 },
        };
        assert!(bad.validate().is_err());
    }
}
