use crate::{
    DispersalCategory, DispersalFactors, FuzzyNumber, LinguisticScale, LinguisticTerm, ModelKind,
    RiskError, TriangularTerm, WeightVector, EQUAL_WEIGHTS, EXPERT_WEIGHTS, STANDARD_TERMS,
    TERM_COUNT,
};

#[test]
fn builtin_weight_vectors_sum_to_one() {
    for (name, w) in [("equal", EQUAL_WEIGHTS), ("expert", EXPERT_WEIGHTS)] {
        assert!((w.sum() - 1.0).abs() < 1e-6, "{name} sums to {}", w.sum());
        assert!(w.validate(name).is_ok());
    }
}

#[test]
fn weight_vector_rejects_bad_sum_and_range() {
    let short = WeightVector::new(0.4, 0.4, 0.15, 0.0);
    assert!(matches!(short.validate("x"), Err(RiskError::Configuration(_))));

    let negative = WeightVector::new(1.2, -0.2, 0.0, 0.0);
    assert!(matches!(negative.validate("x"), Err(RiskError::Configuration(_))));

    let nan = WeightVector::new(f64::NAN, 0.5, 0.25, 0.25);
    assert!(nan.validate("x").is_err());
}

#[test]
fn standard_scale_is_a_partition() {
    let scale = LinguisticScale::new(STANDARD_TERMS).expect("standard terms");
    for step in 0..=200 {
        let x = step as f64 / 200.0;
        let fuzzy = scale.fuzzify_unit(x).unwrap();
        assert!(fuzzy.is_valid());
        assert!((fuzzy.mass() - 1.0).abs() < 1e-9, "mass at {x} = {}", fuzzy.mass());
        let nonzero = fuzzy.degrees().iter().filter(|d| **d > 1e-9).count();
        assert!((1..=2).contains(&nonzero));
    }
}

#[test]
fn crisp_value_inverts_fuzzification() {
    let scale = LinguisticScale::standard();
    for x in [0.0, 0.05, 0.16, 0.2, 0.5, 0.73, 0.84, 0.99, 1.0] {
        let fuzzy = scale.fuzzify_unit(x).unwrap();
        let back = scale.crisp_value(&fuzzy).unwrap();
        assert!((back - x).abs() < 1e-9, "{x} came back as {back}");
    }
}

#[test]
fn out_of_range_positions_clamp_to_end_terms() {
    let scale = LinguisticScale::standard();
    let below = scale.fuzzify_unit(-3.0).unwrap();
    assert_eq!(below, FuzzyNumber::one_hot(LinguisticTerm::Unlikely));
    let above = scale.fuzzify_unit(7.5).unwrap();
    assert_eq!(above, FuzzyNumber::one_hot(LinguisticTerm::ExtremelyHigh));
    assert!(scale.fuzzify_unit(f64::NAN).is_err());
}

#[test]
fn broken_scale_is_a_configuration_error() {
    let mut terms = STANDARD_TERMS;
    terms[3] = TriangularTerm::new(0.55, 0.16, 0.16);
    assert!(matches!(
        LinguisticScale::new(terms),
        Err(RiskError::Configuration(_))
    ));
}

#[test]
fn labels_parse_by_name_and_code() {
    assert_eq!("very high".parse::<LinguisticTerm>().unwrap(), LinguisticTerm::VeryHigh);
    assert_eq!("Extremely_High".parse::<LinguisticTerm>().unwrap(), LinguisticTerm::ExtremelyHigh);
    assert_eq!("VL".parse::<LinguisticTerm>().unwrap(), LinguisticTerm::VeryLow);
    assert_eq!("None".parse::<LinguisticTerm>().unwrap(), LinguisticTerm::Unlikely);

    let err = LinguisticTerm::parse_for("VRS", "Unknown").unwrap_err();
    assert_eq!(err.factor(), Some("VRS"));
}

#[test]
fn term_indices_round_trip() {
    for (i, term) in LinguisticTerm::ALL.iter().enumerate() {
        assert_eq!(term.index(), i);
        assert_eq!(LinguisticTerm::from_index(i), Some(*term));
    }
    assert_eq!(LinguisticTerm::from_index(TERM_COUNT), None);
}

#[test]
fn dominant_term_prefers_higher_severity_on_tie() {
    let mut degrees = [0.0; TERM_COUNT];
    degrees[LinguisticTerm::Low.index()] = 0.5;
    degrees[LinguisticTerm::High.index()] = 0.5;
    let fuzzy = FuzzyNumber::new(degrees).unwrap();
    assert_eq!(fuzzy.dominant_term(), LinguisticTerm::High);

    degrees[LinguisticTerm::Low.index()] = 0.6;
    degrees[LinguisticTerm::High.index()] = 0.4;
    let fuzzy = FuzzyNumber::new(degrees).unwrap();
    assert_eq!(fuzzy.dominant_term(), LinguisticTerm::Low);
}

#[test]
fn fuzzy_number_rejects_out_of_range_degrees() {
    let mut degrees = [0.0; TERM_COUNT];
    degrees[0] = 1.5;
    assert!(FuzzyNumber::new(degrees).is_err());
    let clamped = FuzzyNumber::saturating(degrees);
    assert_eq!(clamped.degree(LinguisticTerm::Unlikely), 1.0);
    assert!(FuzzyNumber::zero().centroid().is_none());
    assert!(FuzzyNumber::zero().normalized().is_none());
}

#[test]
fn model_kind_parses_and_serializes() {
    assert_eq!("ii".parse::<ModelKind>().unwrap(), ModelKind::ModelII);
    assert_eq!("LOWA".parse::<ModelKind>().unwrap(), ModelKind::ModelI);
    assert!("III".parse::<ModelKind>().is_err());
    assert_eq!(serde_json::to_string(&ModelKind::ModelII).unwrap(), "\"II\"");
    assert_eq!(
        serde_json::to_string(&LinguisticTerm::VeryHigh).unwrap(),
        "\"Very High\""
    );
}

#[test]
fn dispersal_categories_follow_thresholds() {
    let cat = |sf, asr, via| DispersalCategory::classify(&DispersalFactors::new(sf, asr, via, 1.0));
    assert_eq!(cat(50.0, 10_000.0, 24.0), DispersalCategory::II);
    assert_eq!(cat(50.0, 50_000.0, 24.0), DispersalCategory::I);
    assert_eq!(cat(500.0, 200_000.0, 24.0), DispersalCategory::III);
    assert_eq!(cat(500.0, 5_000.0, 24.0), DispersalCategory::IV);
}

#[test]
fn deserialized_fuzzy_numbers_are_validated() {
    let ok: FuzzyNumber =
        serde_json::from_str(r#"{"degrees":[0.0,0.0,0.25,0.75,0.0,0.0,0.0]}"#).unwrap();
    assert_eq!(ok.dominant_term(), LinguisticTerm::Medium);

    let too_large = serde_json::from_str::<FuzzyNumber>(r#"{"degrees":[1.5,0,0,0,0,0,0]}"#);
    assert!(too_large.is_err());
    let negative = serde_json::from_str::<FuzzyNumber>(r#"{"degrees":[0,0,-0.1,0,0,0,0]}"#);
    assert!(negative.is_err());

    let back: FuzzyNumber = serde_json::from_str(&serde_json::to_string(&ok).unwrap()).unwrap();
    assert_eq!(back, ok);
}
