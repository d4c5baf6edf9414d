use crate::AssessmentMetrics;
use invasive_core::{RiskAssessment, RiskResult};

/// Count a finished or refused assessment; returns whether it succeeded.
pub fn record_outcome(metrics: &AssessmentMetrics, outcome: &RiskResult<RiskAssessment>) -> bool {
    match outcome {
        Ok(assessment) => {
            metrics.observe(assessment);
            true
        }
        Err(err) => {
            if let Some(factor) = err.factor() {
                metrics.observe_rejection(factor);
            }
            false
        }
    }
}
