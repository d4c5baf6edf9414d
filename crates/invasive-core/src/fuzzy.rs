use crate::error::{RiskError, RiskResult};
use crate::scale::{LinguisticTerm, TERM_COUNT};
use serde::{Deserialize, Serialize};

/// Below this total degree a fuzzy number is treated as empty.
pub const MASS_EPSILON: f64 = 1e-9;

const TIE_EPSILON: f64 = 1e-12;

/// Membership degrees over the seven-term scale, ordered by severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawFuzzyNumber")]
pub struct FuzzyNumber {
    degrees: [f64; TERM_COUNT],
}

/// Wire shape of `FuzzyNumber`; deserialization goes through `FuzzyNumber::new`.
#[derive(Deserialize)]
struct RawFuzzyNumber {
    degrees: [f64; TERM_COUNT],
}

impl TryFrom<RawFuzzyNumber> for FuzzyNumber {
    type Error = RiskError;

    fn try_from(raw: RawFuzzyNumber) -> Result<Self, Self::Error> {
        FuzzyNumber::new(raw.degrees)
    }
}

impl FuzzyNumber {
    pub fn new(degrees: [f64; TERM_COUNT]) -> RiskResult<Self> {
        if let Some(bad) = degrees
            .iter()
            .find(|d| !d.is_finite() || **d < 0.0 || **d > 1.0)
        {
            return Err(RiskError::invalid_input(
                "fuzzy number",
                format!("degree {bad} lies outside [0, 1]"),
            ));
        }
        Ok(Self { degrees })
    }

    /// Clamp every degree into [0, 1]; non-finite degrees become 0.
    pub fn saturating(degrees: [f64; TERM_COUNT]) -> Self {
        Self {
            degrees: degrees.map(|d| if d.is_finite() { d.clamp(0.0, 1.0) } else { 0.0 }),
        }
    }

    pub fn zero() -> Self {
        Self {
            degrees: [0.0; TERM_COUNT],
        }
    }

    pub fn one_hot(term: LinguisticTerm) -> Self {
        let mut degrees = [0.0; TERM_COUNT];
        degrees[term.index()] = 1.0;
        Self { degrees }
    }

    pub fn degrees(&self) -> &[f64; TERM_COUNT] {
        &self.degrees
    }

    pub fn degree(&self, term: LinguisticTerm) -> f64 {
        self.degrees[term.index()]
    }

    pub fn mass(&self) -> f64 {
        self.degrees.iter().sum()
    }

    pub fn is_valid(&self) -> bool {
        self.degrees
            .iter()
            .all(|d| d.is_finite() && (0.0..=1.0).contains(d))
    }

    /// Rescale so the degrees sum to 1; `None` when there is no mass to rescale.
    pub fn normalized(&self) -> Option<Self> {
        let mass = self.mass();
        if mass < MASS_EPSILON {
            return None;
        }
        Some(Self::saturating(self.degrees.map(|d| d / mass)))
    }

    /// Centroid over ordinal positions 0..=6.
    pub fn centroid(&self) -> Option<f64> {
        let mass = self.mass();
        if mass < MASS_EPSILON {
            return None;
        }
        let weighted: f64 = self
            .degrees
            .iter()
            .enumerate()
            .map(|(i, d)| i as f64 * d)
            .sum();
        Some(weighted / mass)
    }

    /// Term with the largest degree; ties go to the more severe term.
    pub fn dominant_term(&self) -> LinguisticTerm {
        let max = self.degrees.iter().copied().fold(0.0_f64, f64::max);
        let index = self
            .degrees
            .iter()
            .rposition(|d| *d >= max - TIE_EPSILON)
            .unwrap_or(0);
        LinguisticTerm::from_index(index).unwrap_or(LinguisticTerm::Unlikely)
    }
}
