use crate::factors::{DispersalCategory, DispersalSubFactor, MainFactor};
use crate::fuzzy::FuzzyNumber;
use crate::quantifier::Quantifier;
use crate::scale::{LinguisticTerm, RiskLevel};
use crate::weights::ModelKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MainFactorScores {
    pub dispersal: FuzzyNumber,
    pub vrs: FuzzyNumber,
    pub sgr: FuzzyNumber,
    pub mis: FuzzyNumber,
}

impl MainFactorScores {
    pub fn get(&self, factor: MainFactor) -> &FuzzyNumber {
        match factor {
            MainFactor::Dispersal => &self.dispersal,
            MainFactor::Vrs => &self.vrs,
            MainFactor::Sgr => &self.sgr,
            MainFactor::Mis => &self.mis,
        }
    }

    pub fn dominant_terms(&self) -> [LinguisticTerm; 4] {
        MainFactor::ALL.map(|f| self.get(f).dominant_term())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SubFactorScore {
    pub factor: DispersalSubFactor,
    pub value: f64,
    /// "Low dispersal" membership after any category hedge.
    pub membership: f64,
    pub fuzzy: FuzzyNumber,
}

/// Intermediate values surfaced for the key-metrics display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyMetrics {
    pub sub_factors: Vec<SubFactorScore>,
    pub hedge_category: Option<DispersalCategory>,
    /// Crisp dispersal risk on the unit axis.
    pub dispersal_risk: f64,
    pub dispersal_index: f64,
    pub dispersal_level: LinguisticTerm,
    pub mis_level: LinguisticTerm,
    pub main_factors: MainFactorScores,
    pub overall: FuzzyNumber,
    pub quantifier: Quantifier,
    pub symbolic_level: LinguisticTerm,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Centroid index over the ordinal scale, in [0, 6].
    pub numeric_score: f64,
    pub risk_level: RiskLevel,
    pub model_used: ModelKind,
    pub key_metrics: KeyMetrics,
}
