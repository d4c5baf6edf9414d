use crate::error::{RiskError, RiskResult};
use crate::scale::LinguisticTerm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Yager RIM quantifier `Q(r)` with linear ramp over `[a, b]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quantifier {
    Mean,
    Most,
    AtLeastHalf,
    Custom { a: f64, b: f64 },
}

impl Quantifier {
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Quantifier::Mean => (0.0, 1.0),
            Quantifier::Most => (0.3, 0.8),
            Quantifier::AtLeastHalf => (0.0, 0.5),
            Quantifier::Custom { a, b } => (*a, *b),
        }
    }

    pub fn validate(&self) -> RiskResult<()> {
        let (a, b) = self.bounds();
        if !a.is_finite() || !b.is_finite() || a < 0.0 || b > 1.0 || a >= b {
            return Err(RiskError::Configuration(format!(
                "quantifier bounds ({a}, {b}) must satisfy 0 <= a < b <= 1"
            )));
        }
        Ok(())
    }

    pub fn evaluate(&self, r: f64) -> f64 {
        let (a, b) = self.bounds();
        if r < a {
            0.0
        } else if r <= b {
            (r - a) / (b - a)
        } else {
            1.0
        }
    }

    /// OWA weights for `n` ordered arguments: `w_i = Q(i/n) - Q((i-1)/n)`.
    pub fn owa_weights(&self, n: usize) -> Vec<f64> {
        let n_f = n as f64;
        (1..=n)
            .map(|i| self.evaluate(i as f64 / n_f) - self.evaluate((i - 1) as f64 / n_f))
            .collect()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Mean => f.write_str("mean"),
            Quantifier::Most => f.write_str("most (0.3, 0.8)"),
            Quantifier::AtLeastHalf => f.write_str("at least half (0, 0.5)"),
            Quantifier::Custom { a, b } => write!(f, "custom ({a}, {b})"),
        }
    }
}

/// How Model II picks its quantifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum QuantifierPolicy {
    Fixed { quantifier: Quantifier },
    /// Case table on the dominant Dispersal and VRS terms.
    Adaptive,
}

impl QuantifierPolicy {
    pub fn validate(&self) -> RiskResult<()> {
        match self {
            QuantifierPolicy::Fixed { quantifier } => quantifier.validate(),
            QuantifierPolicy::Adaptive => Ok(()),
        }
    }

    pub fn resolve(&self, dispersal: LinguisticTerm, vrs: LinguisticTerm) -> Quantifier {
        match self {
            QuantifierPolicy::Fixed { quantifier } => *quantifier,
            QuantifierPolicy::Adaptive => adaptive_quantifier(dispersal, vrs),
        }
    }
}

impl Default for QuantifierPolicy {
    fn default() -> Self {
        QuantifierPolicy::Fixed {
            quantifier: Quantifier::Mean,
        }
    }
}

/// Peiris et al. (2017) also list a "High dispersal, Low/Medium VRS, Medium SGR"
/// case; the first rule already matches every such input.
pub fn adaptive_quantifier(dispersal: LinguisticTerm, vrs: LinguisticTerm) -> Quantifier {
    use LinguisticTerm::{Low, Medium};

    let dis = dispersal.index();
    let negated_vrs = LinguisticTerm::MAX_INDEX - vrs.index();

    if dis >= negated_vrs && (dispersal >= Medium || vrs >= Medium) {
        Quantifier::Mean
    } else if dispersal <= Low && vrs <= Low {
        Quantifier::Most
    } else {
        Quantifier::AtLeastHalf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owa_weights_sum_to_one() {
        for q in [Quantifier::Mean, Quantifier::Most, Quantifier::AtLeastHalf] {
            for n in 1..=6 {
                let sum: f64 = q.owa_weights(n).iter().sum();
                assert!((sum - 1.0).abs() < 1e-12, "{q} n={n} sum={sum}");
            }
        }
    }

    #[test]
    fn most_weights_for_four_arguments() {
        let w = Quantifier::Most.owa_weights(4);
        let expected = [0.0, 0.4, 0.5, 0.1];
        for (got, want) in w.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn custom_bounds_are_validated() {
        assert!(Quantifier::Custom { a: 0.6, b: 0.2 }.validate().is_err());
        assert!(Quantifier::Custom { a: 0.0, b: 1.5 }.validate().is_err());
        assert!(Quantifier::Custom { a: 0.1, b: 0.9 }.validate().is_ok());
    }

    #[test]
    fn adaptive_cases() {
        use LinguisticTerm::*;
        assert_eq!(adaptive_quantifier(ExtremelyHigh, High), Quantifier::Mean);
        assert_eq!(adaptive_quantifier(High, Low), Quantifier::Mean);
        assert_eq!(adaptive_quantifier(Low, Medium), Quantifier::AtLeastHalf);
        assert_eq!(adaptive_quantifier(Low, VeryLow), Quantifier::Most);
        assert_eq!(adaptive_quantifier(Medium, Low), Quantifier::AtLeastHalf);
    }
}
