use crate::aggregation::{aggregate_dispersal, aggregate_mis, aggregate_overall, DispersalOperator};
use crate::defuzzify::{classify, defuzzify};
use crate::membership::{
    apply_hedge, fuzzify, low_dispersal_membership, membership_to_fuzzy, FactorSpec, FactorValue,
};
use crate::symbolic::{lowa, lwa};
use crate::weighting::WeightingSchemes;
use invasive_core::{
    DispersalCategory, DispersalFactors, DispersalSubFactor, FuzzyNumber, KeyMetrics,
    LinguisticFactors, LinguisticScale, LinguisticSubFactor, LinguisticTerm, MainFactorScores,
    ModelKind, Quantifier, QuantifierPolicy, RiskAssessment, RiskError, RiskResult,
    SubFactorScore, WeightVector, EQUAL_WEIGHTS, EXPERT_WEIGHTS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub dispersal_operator: DispersalOperator,
    pub model_i_quantifier: Quantifier,
    pub model_ii_quantifier: QuantifierPolicy,
    /// Reshape SF/VIA memberships by dispersal category. Off keeps the score monotone.
    pub category_hedges: bool,
    pub expert_weights: WeightVector,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dispersal_operator: DispersalOperator::default(),
            model_i_quantifier: Quantifier::Mean,
            model_ii_quantifier: QuantifierPolicy::default(),
            category_hedges: false,
            expert_weights: EXPERT_WEIGHTS,
        }
    }
}

impl EngineConfig {
    pub fn from_json(raw: &str) -> RiskResult<Self> {
        let config: EngineConfig = serde_json::from_str(raw)
            .map_err(|e| RiskError::Configuration(format!("engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RiskResult<()> {
        self.dispersal_operator.validate()?;
        self.model_i_quantifier.validate()?;
        self.model_ii_quantifier.validate()?;
        self.expert_weights.validate("expert weights")
    }
}

/// Stateless scorer; one instance can serve any number of assessments.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    config: EngineConfig,
    scale: LinguisticScale,
    weights: WeightingSchemes,
}

impl RiskEngine {
    pub fn new(config: EngineConfig) -> RiskResult<Self> {
        config.validate()?;
        let weights = WeightingSchemes::new(EQUAL_WEIGHTS, config.expert_weights)?;
        Ok(Self {
            config,
            scale: LinguisticScale::standard(),
            weights,
        })
    }

    pub fn standard() -> Self {
        Self {
            config: EngineConfig::default(),
            scale: LinguisticScale::standard(),
            weights: WeightingSchemes::standard(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scale(&self) -> &LinguisticScale {
        &self.scale
    }

    pub fn weights(&self) -> &WeightingSchemes {
        &self.weights
    }

    pub fn assess(
        &self,
        dispersal: &DispersalFactors,
        linguistic: &LinguisticFactors,
        model: ModelKind,
    ) -> RiskResult<RiskAssessment> {
        let (sub_factors, hedge_category) = self.score_sub_factors(dispersal)?;
        let sub_fuzzy = sub_factors.map(|s| s.fuzzy);
        let dispersal_fn =
            aggregate_dispersal(&sub_fuzzy, &self.config.dispersal_operator, &self.scale)?;
        let dispersal_risk = self
            .scale
            .crisp_value(&dispersal_fn)
            .ok_or(RiskError::DegenerateAggregation {
                mass: dispersal_fn.mass(),
            })?;
        let dispersal_index = defuzzify(&dispersal_fn)?;
        debug!(dispersal_risk, dispersal_index, "dispersal aggregated");

        let [vrs, sgr, ha, nmd] = LinguisticSubFactor::ALL.map(|f| {
            let label = FactorValue::Label(linguistic.label(f));
            fuzzify(label, FactorSpec::Linguistic(f), &self.scale)
        });
        let (vrs, sgr, ha, nmd) = (vrs?, sgr?, ha?, nmd?);
        let mis = aggregate_mis(&ha, &nmd)?;

        let main_factors = MainFactorScores {
            dispersal: dispersal_fn,
            vrs,
            sgr,
            mis,
        };
        let dominant = main_factors.dominant_terms();
        let quantifier = self.quantifier_for(model, &main_factors);
        let weights = self.weights.get_weights(model);
        debug!(%model, %quantifier, ?dominant, "main factors scored");

        let overall = aggregate_overall(&main_factors, &weights, &quantifier)?;
        let numeric_score = defuzzify(&overall)?;
        let risk_level = classify(numeric_score);

        // Symbolic MIS comes straight from the HA and NMD labels.
        let [dis_term, vrs_term, sgr_term, _] = dominant;
        let mis_term = lowa(&[ha.dominant_term(), nmd.dominant_term()], &Quantifier::Mean)
            .unwrap_or(mis.dominant_term());
        let symbolic_terms: [LinguisticTerm; 4] = [dis_term, vrs_term, sgr_term, mis_term];
        let symbolic = match model {
            ModelKind::ModelI => lowa(&symbolic_terms, &quantifier),
            ModelKind::ModelII => lwa(&symbolic_terms, &quantifier),
        };
        let symbolic_level = symbolic.unwrap_or(risk_level);

        info!(
            %model,
            numeric_score,
            level = %risk_level,
            symbolic = %symbolic_level,
            "assessment complete"
        );

        Ok(RiskAssessment {
            numeric_score,
            risk_level,
            model_used: model,
            key_metrics: KeyMetrics {
                sub_factors: sub_factors.to_vec(),
                hedge_category,
                dispersal_risk,
                dispersal_index,
                dispersal_level: classify(dispersal_index),
                mis_level: mis.dominant_term(),
                main_factors,
                overall,
                quantifier,
                symbolic_level,
            },
        })
    }

    /// Run both models on the same input, Model I first.
    pub fn compare_models(
        &self,
        dispersal: &DispersalFactors,
        linguistic: &LinguisticFactors,
    ) -> RiskResult<Vec<RiskAssessment>> {
        ModelKind::ALL
            .iter()
            .map(|model| self.assess(dispersal, linguistic, *model))
            .collect()
    }

    fn score_sub_factors(
        &self,
        dispersal: &DispersalFactors,
    ) -> RiskResult<([SubFactorScore; 4], Option<DispersalCategory>)> {
        let mut memberships = [0.0; 4];
        for (slot, factor) in memberships.iter_mut().zip(DispersalSubFactor::ALL) {
            *slot = low_dispersal_membership(factor, dispersal.value(factor))?;
        }

        let hedge_category = if self.config.category_hedges {
            let category = DispersalCategory::classify(dispersal);
            warn!(?category, "category hedge reshapes SF/VIA memberships");
            memberships = apply_hedge(category, memberships);
            Some(category)
        } else {
            None
        };

        let mut scores = [SubFactorScore {
            factor: DispersalSubFactor::SeedsPerFruit,
            value: 0.0,
            membership: 0.0,
            fuzzy: FuzzyNumber::zero(),
        }; 4];
        for ((score, factor), mu) in scores
            .iter_mut()
            .zip(DispersalSubFactor::ALL)
            .zip(memberships)
        {
            *score = SubFactorScore {
                factor,
                value: dispersal.value(factor),
                membership: mu,
                fuzzy: membership_to_fuzzy(mu, &self.scale)?,
            };
            debug!(factor = %factor, value = score.value, mu, "sub-factor fuzzified");
        }
        Ok((scores, hedge_category))
    }

    fn quantifier_for(&self, model: ModelKind, main_factors: &MainFactorScores) -> Quantifier {
        match model {
            ModelKind::ModelI => self.config.model_i_quantifier,
            ModelKind::ModelII => {
                let policy = self.config.model_ii_quantifier;
                let quantifier = policy.resolve(
                    main_factors.dispersal.dominant_term(),
                    main_factors.vrs.dominant_term(),
                );
                if policy == QuantifierPolicy::Adaptive {
                    warn!(%quantifier, "adaptive quantifier selected");
                }
                quantifier
            }
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::standard()
    }
}
