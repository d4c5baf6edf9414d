use crate::error::{RiskError, RiskResult};
use crate::factors::MainFactor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Importance of each main factor in the overall aggregation. Components sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightVector {
    pub dispersal: f64,
    pub vrs: f64,
    pub sgr: f64,
    pub mis: f64,
}

pub const EQUAL_WEIGHTS: WeightVector = WeightVector::new(0.25, 0.25, 0.25, 0.25);

pub const EXPERT_WEIGHTS: WeightVector = WeightVector::new(0.40, 0.40, 0.15, 0.05);

impl WeightVector {
    pub const fn new(dispersal: f64, vrs: f64, sgr: f64, mis: f64) -> Self {
        Self {
            dispersal,
            vrs,
            sgr,
            mis,
        }
    }

    pub fn get(&self, factor: MainFactor) -> f64 {
        match factor {
            MainFactor::Dispersal => self.dispersal,
            MainFactor::Vrs => self.vrs,
            MainFactor::Sgr => self.sgr,
            MainFactor::Mis => self.mis,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.dispersal, self.vrs, self.sgr, self.mis]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self, name: &str) -> RiskResult<()> {
        for (factor, w) in MainFactor::ALL.iter().zip(self.as_array()) {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(RiskError::Configuration(format!(
                    "{name}: weight for {factor} is {w}, expected a value in [0, 1]"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(RiskError::Configuration(format!(
                "{name}: weights sum to {sum}, expected 1"
            )));
        }
        Ok(())
    }
}

/// Aggregation model: Model I (LOWA, equal weights) or Model II (LWA, expert weights).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModelKind {
    #[serde(rename = "I")]
    ModelI,
    #[serde(rename = "II")]
    ModelII,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::ModelI, ModelKind::ModelII];

    pub fn code(self) -> &'static str {
        match self {
            ModelKind::ModelI => "I",
            ModelKind::ModelII => "II",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::ModelI => "Model I (LOWA)",
            ModelKind::ModelII => "Model II (LWA)",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelKind {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "1" | "model-i" | "model1" | "lowa" => Ok(ModelKind::ModelI),
            "ii" | "2" | "model-ii" | "model2" | "lwa" => Ok(ModelKind::ModelII),
            other => Err(RiskError::invalid_input(
                "model",
                format!("unknown model {other:?}, expected I or II"),
            )),
        }
    }
}
