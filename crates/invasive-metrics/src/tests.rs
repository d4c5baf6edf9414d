use crate::{record_outcome, AssessmentMetrics};
use invasive_core::{DispersalFactors, LinguisticFactors, ModelKind};
use invasive_engine::RiskEngine;

fn sample() -> (DispersalFactors, LinguisticFactors) {
    (
        DispersalFactors::new(500.0, 5000.0, 24.0, 9.0),
        LinguisticFactors::uniform("High"),
    )
}

#[test]
fn observed_assessments_appear_in_exposition() {
    let metrics = AssessmentMetrics::new().unwrap();
    let engine = RiskEngine::standard();
    let (dispersal, linguistic) = sample();

    for result in engine.compare_models(&dispersal, &linguistic).unwrap() {
        metrics.observe(&result);
    }
    assert_eq!(metrics.assessments_for(ModelKind::ModelI), 1);
    assert_eq!(metrics.assessments_for(ModelKind::ModelII), 1);

    let text = metrics.encode_text().unwrap();
    assert!(text.contains("invasive_assessments_total"));
    assert!(text.contains("invasive_risk_index{model=\"II\"}"));
    assert!(text.contains("invasive_dispersal_risk{model=\"I\"}"));
}

#[test]
fn rejected_inputs_are_counted_per_factor() {
    let metrics = AssessmentMetrics::new().unwrap();
    let engine = RiskEngine::standard();
    let (dispersal, _) = sample();
    let linguistic = LinguisticFactors::new("High", "Unknown", "High", "High");

    let outcome = engine.assess(&dispersal, &linguistic, ModelKind::ModelII);
    assert!(!record_outcome(&metrics, &outcome));
    let outcome = engine.assess(&dispersal, &LinguisticFactors::uniform("Low"), ModelKind::ModelII);
    assert!(record_outcome(&metrics, &outcome));

    assert_eq!(metrics.rejected_inputs_total.with_label_values(&["SGR"]).get(), 1);
    assert_eq!(metrics.assessments_for(ModelKind::ModelII), 1);
    let text = metrics.encode_text().unwrap();
    assert!(text.contains("invasive_rejected_inputs_total{factor=\"SGR\"} 1"));
}

#[test]
fn separate_instances_do_not_share_state() {
    let first = AssessmentMetrics::new().unwrap();
    let second = AssessmentMetrics::new().unwrap();
    first.observe_rejection("SF");
    assert_eq!(first.rejected_inputs_total.with_label_values(&["SF"]).get(), 1);
    assert_eq!(second.rejected_inputs_total.with_label_values(&["SF"]).get(), 0);
}
