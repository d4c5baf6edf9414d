use crate::error::{RiskError, RiskResult};
use crate::fuzzy::FuzzyNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TERM_COUNT: usize = 7;

/// Ordered seven-term scale shared by linguistic inputs, fuzzy numbers and risk levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinguisticTerm {
    #[serde(rename = "Unlikely")]
    Unlikely,
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "Extremely High")]
    ExtremelyHigh,
}

/// Output classification uses the same ordered scale.
pub type RiskLevel = LinguisticTerm;

impl LinguisticTerm {
    pub const ALL: [LinguisticTerm; TERM_COUNT] = [
        LinguisticTerm::Unlikely,
        LinguisticTerm::VeryLow,
        LinguisticTerm::Low,
        LinguisticTerm::Medium,
        LinguisticTerm::High,
        LinguisticTerm::VeryHigh,
        LinguisticTerm::ExtremelyHigh,
    ];

    pub const MAX_INDEX: usize = TERM_COUNT - 1;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            LinguisticTerm::Unlikely => "Unlikely",
            LinguisticTerm::VeryLow => "Very Low",
            LinguisticTerm::Low => "Low",
            LinguisticTerm::Medium => "Medium",
            LinguisticTerm::High => "High",
            LinguisticTerm::VeryHigh => "Very High",
            LinguisticTerm::ExtremelyHigh => "Extremely High",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LinguisticTerm::Unlikely => "U",
            LinguisticTerm::VeryLow => "VL",
            LinguisticTerm::Low => "L",
            LinguisticTerm::Medium => "M",
            LinguisticTerm::High => "H",
            LinguisticTerm::VeryHigh => "VH",
            LinguisticTerm::ExtremelyHigh => "EH",
        }
    }

    /// Parse a user-supplied label, attributing failures to `factor`.
    pub fn parse_for(factor: &str, raw: &str) -> RiskResult<Self> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let term = match key.as_str() {
            "unlikely" | "none" | "u" => LinguisticTerm::Unlikely,
            "verylow" | "vl" => LinguisticTerm::VeryLow,
            "low" | "l" => LinguisticTerm::Low,
            "medium" | "m" => LinguisticTerm::Medium,
            "high" | "h" => LinguisticTerm::High,
            "veryhigh" | "vh" => LinguisticTerm::VeryHigh,
            "extremelyhigh" | "eh" => LinguisticTerm::ExtremelyHigh,
            _ => {
                return Err(RiskError::invalid_input(
                    factor,
                    format!("unrecognized linguistic label {raw:?}"),
                ))
            }
        };
        Ok(term)
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LinguisticTerm {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for("label", s)
    }
}

/// Triangular fuzzy number on the unit risk axis: `(center, left spread, right spread)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TriangularTerm {
    pub center: f64,
    pub left: f64,
    pub right: f64,
}

impl TriangularTerm {
    pub const fn new(center: f64, left: f64, right: f64) -> Self {
        Self {
            center,
            left,
            right,
        }
    }

    pub fn lower_foot(&self) -> f64 {
        self.center - self.left
    }

    pub fn upper_foot(&self) -> f64 {
        self.center + self.right
    }

    /// Membership of `x`; a zero spread makes that side a shoulder.
    pub fn membership(&self, x: f64) -> f64 {
        if x < self.lower_foot() || x > self.upper_foot() {
            return 0.0;
        }
        let mu = if x <= self.center {
            if self.left <= 0.0 {
                1.0
            } else {
                (x - self.lower_foot()) / self.left
            }
        } else if self.right <= 0.0 {
            1.0
        } else {
            (self.upper_foot() - x) / self.right
        };
        mu.clamp(0.0, 1.0)
    }
}

/// Term definitions from the source publication's linguistic scale.
pub const STANDARD_TERMS: [TriangularTerm; TERM_COUNT] = [
    TriangularTerm::new(0.0, 0.0, 0.16),
    TriangularTerm::new(0.16, 0.16, 0.18),
    TriangularTerm::new(0.34, 0.18, 0.16),
    TriangularTerm::new(0.5, 0.16, 0.16),
    TriangularTerm::new(0.66, 0.16, 0.18),
    TriangularTerm::new(0.84, 0.18, 0.16),
    TriangularTerm::new(1.0, 0.16, 0.0),
];

const PARTITION_TOLERANCE: f64 = 1e-9;

/// The seven triangular terms, checked to form a strong fuzzy partition of [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LinguisticScale {
    terms: [TriangularTerm; TERM_COUNT],
}

impl LinguisticScale {
    pub fn new(terms: [TriangularTerm; TERM_COUNT]) -> RiskResult<Self> {
        for (i, t) in terms.iter().enumerate() {
            let finite = t.center.is_finite() && t.left.is_finite() && t.right.is_finite();
            if !finite || t.left < 0.0 || t.right < 0.0 {
                return Err(RiskError::Configuration(format!(
                    "term {} has invalid spreads ({}, {}, {})",
                    i, t.center, t.left, t.right
                )));
            }
        }
        let first = terms[0];
        let last = terms[TERM_COUNT - 1];
        if first.center.abs() > PARTITION_TOLERANCE || first.left > PARTITION_TOLERANCE {
            return Err(RiskError::Configuration(
                "first term must be a left shoulder at 0".into(),
            ));
        }
        if (last.center - 1.0).abs() > PARTITION_TOLERANCE || last.right > PARTITION_TOLERANCE {
            return Err(RiskError::Configuration(
                "last term must be a right shoulder at 1".into(),
            ));
        }
        for pair in terms.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.center <= a.center
                || (a.upper_foot() - b.center).abs() > PARTITION_TOLERANCE
                || (b.lower_foot() - a.center).abs() > PARTITION_TOLERANCE
            {
                return Err(RiskError::Configuration(format!(
                    "terms centred at {} and {} do not partition the risk axis",
                    a.center, b.center
                )));
            }
        }
        Ok(Self { terms })
    }

    pub fn standard() -> Self {
        Self {
            terms: STANDARD_TERMS,
        }
    }

    pub fn term(&self, term: LinguisticTerm) -> TriangularTerm {
        self.terms[term.index()]
    }

    pub fn centers(&self) -> [f64; TERM_COUNT] {
        self.terms.map(|t| t.center)
    }

    /// Fuzzify a position on the unit risk axis; positions outside [0, 1] clamp to the end terms.
    pub fn fuzzify_unit(&self, position: f64) -> RiskResult<FuzzyNumber> {
        if !position.is_finite() {
            return Err(RiskError::invalid_input(
                "risk position",
                format!("{position} is not a finite number"),
            ));
        }
        let x = position.clamp(0.0, 1.0);
        Ok(FuzzyNumber::saturating(self.terms.map(|t| t.membership(x))))
    }

    /// Crisp position on the unit axis (centre-weighted mean); inverts `fuzzify_unit`.
    pub fn crisp_value(&self, fuzzy: &FuzzyNumber) -> Option<f64> {
        let mass = fuzzy.mass();
        if mass < crate::fuzzy::MASS_EPSILON {
            return None;
        }
        let weighted: f64 = fuzzy
            .degrees()
            .iter()
            .zip(self.terms.iter())
            .map(|(d, t)| d * t.center)
            .sum();
        Some((weighted / mass).clamp(0.0, 1.0))
    }
}

impl Default for LinguisticScale {
    fn default() -> Self {
        Self::standard()
    }
}
