use anyhow::Context;
use invasive_core::{ModelKind, RiskAssessment};
use prometheus::{Encoder, GaugeVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Assessment metrics on a private registry, so several instances can coexist.
pub struct AssessmentMetrics {
    registry: Registry,
    pub assessments_total: IntCounterVec,
    pub risk_index: GaugeVec,
    pub dispersal_risk: GaugeVec,
    pub rejected_inputs_total: IntCounterVec,
}

impl AssessmentMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let assessments_total = IntCounterVec::new(
            Opts::new(
                "invasive_assessments_total",
                "Completed assessments per model and risk level",
            ),
            &["model", "level"],
        )?;
        let risk_index = GaugeVec::new(
            Opts::new(
                "invasive_risk_index",
                "Numeric risk index of the latest assessment, 0 to 6",
            ),
            &["model"],
        )?;
        let dispersal_risk = GaugeVec::new(
            Opts::new(
                "invasive_dispersal_risk",
                "Crisp dispersal risk of the latest assessment, 0 to 1",
            ),
            &["model"],
        )?;
        let rejected_inputs_total = IntCounterVec::new(
            Opts::new(
                "invasive_rejected_inputs_total",
                "Assessments refused because of an invalid input",
            ),
            &["factor"],
        )?;

        registry.register(Box::new(assessments_total.clone()))?;
        registry.register(Box::new(risk_index.clone()))?;
        registry.register(Box::new(dispersal_risk.clone()))?;
        registry.register(Box::new(rejected_inputs_total.clone()))?;

        Ok(Self {
            registry,
            assessments_total,
            risk_index,
            dispersal_risk,
            rejected_inputs_total,
        })
    }

    pub fn observe(&self, assessment: &RiskAssessment) {
        let model = assessment.model_used.code();
        self.assessments_total
            .with_label_values(&[model, assessment.risk_level.code()])
            .inc();
        self.risk_index
            .with_label_values(&[model])
            .set(assessment.numeric_score);
        self.dispersal_risk
            .with_label_values(&[model])
            .set(assessment.key_metrics.dispersal_risk);
    }

    pub fn observe_rejection(&self, factor: &str) {
        self.rejected_inputs_total
            .with_label_values(&[factor])
            .inc();
    }

    pub fn assessments_for(&self, model: ModelKind) -> u64 {
        self.registry
            .gather()
            .iter()
            .filter(|family| family.get_name() == "invasive_assessments_total")
            .flat_map(|family| family.get_metric())
            .filter(|metric| {
                metric
                    .get_label()
                    .iter()
                    .any(|l| l.get_name() == "model" && l.get_value() == model.code())
            })
            .map(|metric| metric.get_counter().get_value() as u64)
            .sum()
    }

    pub fn encode_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .context("encode metric families")?;
        String::from_utf8(buffer).context("metrics exposition is not utf-8")
    }
}
