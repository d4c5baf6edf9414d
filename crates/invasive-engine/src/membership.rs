//! Membership functions for the dispersal sub-factors and linguistic ratings.
//!
//! Each quantitative sub-factor has a non-increasing "low dispersal" curve
//! (Peiris et al. 2017, Eqs. 2-5). Its complement is a position on the unit
//! risk axis, which the linguistic scale turns into a fuzzy number.

use invasive_core::{
    DispersalCategory, DispersalSubFactor, FuzzyNumber, LinguisticScale, LinguisticSubFactor,
    LinguisticTerm, RiskError, RiskResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorSpec {
    Quantitative(DispersalSubFactor),
    Linguistic(LinguisticSubFactor),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorValue<'a> {
    Numeric(f64),
    Label(&'a str),
}

pub fn fuzzify(
    value: FactorValue<'_>,
    spec: FactorSpec,
    scale: &LinguisticScale,
) -> RiskResult<FuzzyNumber> {
    match (spec, value) {
        (FactorSpec::Quantitative(factor), FactorValue::Numeric(x)) => {
            let mu = low_dispersal_membership(factor, x)?;
            membership_to_fuzzy(mu, scale)
        }
        (FactorSpec::Linguistic(factor), FactorValue::Label(raw)) => fuzzify_label(factor, raw),
        (FactorSpec::Quantitative(factor), FactorValue::Label(raw)) => Err(
            RiskError::invalid_input(factor.code(), format!("expected a number, got {raw:?}")),
        ),
        (FactorSpec::Linguistic(factor), FactorValue::Numeric(x)) => Err(
            RiskError::invalid_input(factor.code(), format!("expected a label, got {x}")),
        ),
    }
}

pub fn fuzzify_label(factor: LinguisticSubFactor, raw: &str) -> RiskResult<FuzzyNumber> {
    let term = LinguisticTerm::parse_for(factor.code(), raw)?;
    Ok(FuzzyNumber::one_hot(term))
}

/// Map a "low dispersal" membership onto the risk scale as its complement.
pub fn membership_to_fuzzy(mu: f64, scale: &LinguisticScale) -> RiskResult<FuzzyNumber> {
    scale.fuzzify_unit(1.0 - mu)
}

pub fn validate_domain(factor: DispersalSubFactor, x: f64) -> RiskResult<()> {
    if !x.is_finite() {
        return Err(RiskError::invalid_input(
            factor.code(),
            format!("{x} is not a finite number"),
        ));
    }
    let reason = match factor {
        DispersalSubFactor::SeedsPerFruit if x <= 0.0 => "seeds per fruit must be positive",
        DispersalSubFactor::AnnualSeedRain if x < 0.0 => "annual seed rain must be non-negative",
        DispersalSubFactor::Viability if x < 0.0 => "viability must be non-negative",
        DispersalSubFactor::LongDistanceDispersal if !(0.0..=10.0).contains(&x) => {
            "long-distance dispersal must lie in [0, 10]"
        }
        _ => return Ok(()),
    };
    Err(RiskError::invalid_input(
        factor.code(),
        format!("{reason}, got {x}"),
    ))
}

pub fn low_dispersal_membership(factor: DispersalSubFactor, x: f64) -> RiskResult<f64> {
    validate_domain(factor, x)?;
    let mu = match factor {
        DispersalSubFactor::SeedsPerFruit => seeds_per_fruit(x),
        DispersalSubFactor::AnnualSeedRain => annual_seed_rain(x),
        DispersalSubFactor::Viability => viability(x),
        DispersalSubFactor::LongDistanceDispersal => long_distance_dispersal(x),
    };
    Ok(mu.clamp(0.0, 1.0))
}

fn seeds_per_fruit(x: f64) -> f64 {
    if x < 1.0 {
        1.0
    } else if x <= 501.0 {
        1.0 - 2.0 * ((x - 1.0) / 1000.0).powi(2)
    } else if x <= 1001.0 {
        2.0 * ((x - 1001.0) / 1000.0).powi(2)
    } else {
        0.0
    }
}

fn annual_seed_rain(x: f64) -> f64 {
    if x < 1e4 {
        2.0 * (1e4 - x).powi(2) / 8e8 + 0.75
    } else if x < 1e5 {
        2.0 * (1e5 - x).powi(2) / 5.4e10 + 0.45
    } else if x <= 1e7 {
        2.0 * (1e7 - x).powi(2) / 4.356e14
    } else {
        0.0
    }
}

fn viability(x: f64) -> f64 {
    if x < 3.0 {
        1.0
    } else if x < 602.0 {
        1.0 - 2.0 * (x - 3.0).powi(2) / 2_376_060.0
    } else if x <= 1200.0 {
        2.0 * (1200.0 - x).powi(2) / 1_028_572.0
    } else {
        0.0
    }
}

fn long_distance_dispersal(x: f64) -> f64 {
    if x < 2.0 {
        1.0 - 2.0 * x.powi(2) / 160.0
    } else if x < 5.0 {
        0.95 - 2.0 * (x - 2.0).powi(2) / 60.0
    } else {
        2.0 * (10.0 - x).powi(2) / 77.0
    }
}

/// Concentration/dilation exponents applied to (SF, VIA) per dispersal category.
pub fn hedge_exponents(category: DispersalCategory) -> (f64, f64) {
    match category {
        DispersalCategory::I => (6.0, 1.0),
        DispersalCategory::II => (0.5, 7.35),
        DispersalCategory::III => (0.5, 1.0),
        DispersalCategory::IV => (1.0, 1.0),
    }
}

/// Reshape memberships ordered as `DispersalSubFactor::ALL`.
pub fn apply_hedge(category: DispersalCategory, memberships: [f64; 4]) -> [f64; 4] {
    let (sf_exp, via_exp) = hedge_exponents(category);
    let [sf, asr, via, ldd] = memberships;
    [sf.powf(sf_exp), asr, via.powf(via_exp), ldd]
}
