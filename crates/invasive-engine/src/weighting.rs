use invasive_core::{ModelKind, RiskResult, WeightVector, EQUAL_WEIGHTS, EXPERT_WEIGHTS};

/// Weight vectors per model, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightingSchemes {
    equal: WeightVector,
    expert: WeightVector,
}

impl WeightingSchemes {
    pub fn new(equal: WeightVector, expert: WeightVector) -> RiskResult<Self> {
        equal.validate("equal weights")?;
        expert.validate("expert weights")?;
        Ok(Self { equal, expert })
    }

    pub fn standard() -> Self {
        Self {
            equal: EQUAL_WEIGHTS,
            expert: EXPERT_WEIGHTS,
        }
    }

    pub fn get_weights(&self, model: ModelKind) -> WeightVector {
        match model {
            ModelKind::ModelI => self.equal,
            ModelKind::ModelII => self.expert,
        }
    }
}

impl Default for WeightingSchemes {
    fn default() -> Self {
        Self::standard()
    }
}
