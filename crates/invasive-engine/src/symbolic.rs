//! Symbolic aggregation on term indices (linguistic OWA, Herrera & Herrera-Viedma).
//!
//! Reported next to the numeric result as a cross-check; it never drives
//! the risk level.

use invasive_core::{LinguisticTerm, MainFactor, Quantifier};

/// Importance of each main factor, ordered as `MainFactor::ALL`.
pub const EXPERT_IMPORTANCE: [LinguisticTerm; 4] = [
    LinguisticTerm::VeryHigh,
    LinguisticTerm::VeryHigh,
    LinguisticTerm::Medium,
    LinguisticTerm::High,
];

/// With `Quantifier::Mean` the verdict is the rounded mean index (ties to even);
/// any other quantifier goes through the `C^n` recursion.
pub fn lowa(terms: &[LinguisticTerm], quantifier: &Quantifier) -> Option<LinguisticTerm> {
    if terms.is_empty() {
        return None;
    }
    let mut indices: Vec<usize> = terms.iter().map(|t| t.index()).collect();
    if *quantifier == Quantifier::Mean {
        let mean = indices.iter().sum::<usize>() as f64 / indices.len() as f64;
        return LinguisticTerm::from_index(mean.round_ties_even() as usize);
    }
    indices.sort_unstable_by(|a, b| b.cmp(a));
    let weights = quantifier.owa_weights(indices.len());
    LinguisticTerm::from_index(convex_combination(&indices, &weights))
}

/// `C^n`: blend the top term with the recursive combination of the rest.
fn convex_combination(sorted: &[usize], weights: &[f64]) -> usize {
    let (first, rest) = match sorted.split_first() {
        Some((first, rest)) if !rest.is_empty() => (*first, rest),
        Some((first, _)) => return *first,
        None => return 0,
    };
    let w1 = weights[0];
    let tail: f64 = weights[1..].iter().sum();
    if tail <= f64::EPSILON {
        return first;
    }
    let beta: Vec<f64> = weights[1..].iter().map(|w| w / tail).collect();
    let lower = convex_combination(rest, &beta);

    let step = (w1 * first.saturating_sub(lower) as f64).round() as usize;
    (lower + step).min(LinguisticTerm::MAX_INDEX)
}

/// Linguistic weighted aggregation: each factor's term is capped by its importance, then LOWA.
pub fn lwa(terms: &[LinguisticTerm; 4], quantifier: &Quantifier) -> Option<LinguisticTerm> {
    let capped = MainFactor::ALL.map(|f| {
        let i = f as usize;
        terms[i].min(EXPERT_IMPORTANCE[i])
    });
    lowa(&capped, quantifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LinguisticTerm::*;

    #[test]
    fn mean_rounds_the_average_index_ties_to_even() {
        assert_eq!(lowa(&[High, Low], &Quantifier::Mean), Some(Medium));
        assert_eq!(lowa(&[Low, Medium], &Quantifier::Mean), Some(Low));
        assert_eq!(lowa(&[Medium, High], &Quantifier::Mean), Some(High));
        assert_eq!(lowa(&[Unlikely, VeryHigh, Medium, VeryLow], &Quantifier::Mean), Some(Low));
        assert_eq!(lowa(&[Unlikely, Unlikely, Low, Medium], &Quantifier::Mean), Some(VeryLow));
    }

    #[test]
    fn mean_matches_the_rounded_average_for_every_input() {
        for code in 0..7usize.pow(4) {
            let idx = [code % 7, code / 7 % 7, code / 49 % 7, code / 343];
            let terms = idx.map(|i| LinguisticTerm::from_index(i).unwrap());
            let expected = (idx.iter().sum::<usize>() as f64 / 4.0).round_ties_even() as usize;
            assert_eq!(lowa(&terms, &Quantifier::Mean).map(|t| t.index()), Some(expected));
        }
    }

    #[test]
    fn non_mean_quantifiers_use_the_recursion() {
        // Most for four arguments weighs [0, 0.4, 0.5, 0.1]
        assert_eq!(lowa(&[Unlikely, VeryHigh, Medium, VeryLow], &Quantifier::Most), Some(Low));
    }

    #[test]
    fn uniform_input_is_a_fixed_point() {
        for q in [Quantifier::Mean, Quantifier::Most, Quantifier::AtLeastHalf] {
            assert_eq!(lowa(&[VeryHigh; 4], &q), Some(VeryHigh));
        }
    }

    #[test]
    fn at_least_half_takes_the_top_pair() {
        let terms = [Unlikely, ExtremelyHigh, Low, VeryHigh];
        assert_eq!(lowa(&terms, &Quantifier::AtLeastHalf), Some(ExtremelyHigh));
    }

    #[test]
    fn lwa_caps_by_importance() {
        let terms = [ExtremelyHigh; 4];
        // capped to [VH, VH, M, H]
        assert_eq!(lwa(&terms, &Quantifier::Mean), Some(High));
        assert_eq!(lowa(&[], &Quantifier::Mean), None);
    }
}
