use crate::engine::RiskEngine;
use chrono::Utc;
use invasive_core::{DispersalFactors, LinguisticFactors, ModelKind, RiskAssessment, RiskResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope handed to the presentation layer. The assessments inside stay
/// deterministic; only `report_id` and `date` vary between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    pub report_id: Uuid,
    pub date: String,
    pub species: String,
    pub dispersal: DispersalFactors,
    pub linguistic: LinguisticFactors,
    pub assessments: Vec<RiskAssessment>,
}

impl AssessmentReport {
    pub fn new(
        species: &str,
        dispersal: DispersalFactors,
        linguistic: LinguisticFactors,
        assessments: Vec<RiskAssessment>,
    ) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            species: species.into(),
            dispersal,
            linguistic,
            assessments,
        }
    }
}

pub fn generate_report(
    engine: &RiskEngine,
    species: &str,
    dispersal: DispersalFactors,
    linguistic: LinguisticFactors,
    models: &[ModelKind],
) -> RiskResult<AssessmentReport> {
    let assessments = models
        .iter()
        .map(|model| engine.assess(&dispersal, &linguistic, *model))
        .collect::<RiskResult<Vec<_>>>()?;

    Ok(AssessmentReport::new(species, dispersal, linguistic, assessments))
}
