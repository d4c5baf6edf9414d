use invasive_core::{FuzzyNumber, RiskError, RiskLevel, RiskResult, TERM_COUNT};

pub const SCORE_MAX: f64 = (TERM_COUNT - 1) as f64;

/// Lower bound of each level band; a level covers `[threshold, next threshold)`.
pub const RISK_THRESHOLDS: [f64; TERM_COUNT] = [0.0, 0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

/// Centroid of the aggregated vector over ordinal positions 0..=6.
pub fn defuzzify(fuzzy: &FuzzyNumber) -> RiskResult<f64> {
    let score = fuzzy
        .centroid()
        .ok_or(RiskError::DegenerateAggregation { mass: fuzzy.mass() })?;
    Ok(score.clamp(0.0, SCORE_MAX))
}

pub fn classify(score: f64) -> RiskLevel {
    if score.is_nan() {
        return RiskLevel::Unlikely;
    }
    let score = score.clamp(0.0, SCORE_MAX);
    let index = RISK_THRESHOLDS
        .iter()
        .rposition(|lower| score >= *lower)
        .unwrap_or(0);
    RiskLevel::from_index(index).unwrap_or(RiskLevel::Unlikely)
}

/// Score interval mapped to `level`; the top band is closed at `SCORE_MAX`.
pub fn level_bounds(level: RiskLevel) -> (f64, f64) {
    let i = level.index();
    let upper = RISK_THRESHOLDS.get(i + 1).copied().unwrap_or(SCORE_MAX);
    (RISK_THRESHOLDS[i], upper)
}
