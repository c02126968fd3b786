//! Resonance scoring: the choice and match functions of the base ART layer.
//!
//! The engine never computes activations itself. It asks a
//! [`ResonanceScorer`] for one choice score and one match score per
//! prototype, in store order, and drives the winner search from those.

use crate::types::Prototype;

/// Choice/match functions evaluated against the current prototypes.
///
/// Implementations receive shared references only, so scoring can never
/// mutate the prototype store.
pub trait ResonanceScorer {
    /// Activation per prototype. Higher means more preferred.
    fn choice(&self, input: &[f64], prototypes: &[Prototype]) -> Vec<f64>;

    /// Match per prototype, in [0, 1], compared against vigilance.
    fn match_scores(&self, input: &[f64], prototypes: &[Prototype]) -> Vec<f64>;
}

/// Fuzzy ART scoring.
///
/// - choice: `|I ∧ w| / (alpha + |w|)`
/// - match: `|I ∧ w| / |I|`
///
/// where `∧` is the elementwise minimum and `|·|` the L1 norm. Inputs are
/// expected to be complement coded (see [`complement_code`]). Negative
/// components carry no mass, so match stays in [0, 1] for any finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyArtScorer {
    pub alpha: f64,
}

impl FuzzyArtScorer {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl ResonanceScorer for FuzzyArtScorer {
    fn choice(&self, input: &[f64], prototypes: &[Prototype]) -> Vec<f64> {
        prototypes
            .iter()
            .map(|p| fuzzy_and_norm(input, &p.weights) / (self.alpha + p.magnitude()))
            .collect()
    }

    fn match_scores(&self, input: &[f64], prototypes: &[Prototype]) -> Vec<f64> {
        let input_norm: f64 = input.iter().map(|x| x.max(0.0)).sum();
        prototypes
            .iter()
            .map(|p| {
                if input_norm == 0.0 {
                    0.0
                } else {
                    fuzzy_and_norm(input, &p.weights) / input_norm
                }
            })
            .collect()
    }
}

/// `|a ∧ b|`: summed elementwise minimum, with negative minima counted as 0.
pub fn fuzzy_and_norm(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x.min(*y).max(0.0)).sum()
}

/// Complement coding: `[x, 1 - x]`, with `x` clamped into [0, 1].
///
/// Doubles the dimension and fixes the L1 norm of every coded input at
/// `x.len()`, which keeps fuzzy ART categories from proliferating.
pub fn complement_code(x: &[f64]) -> Vec<f64> {
    let clamped: Vec<f64> = x.iter().map(|v| v.clamp(0.0, 1.0)).collect();
    let mut coded = Vec::with_capacity(clamped.len() * 2);
    coded.extend_from_slice(&clamped);
    coded.extend(clamped.iter().map(|v| 1.0 - v));
    coded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    fn proto(weights: &[f64]) -> Prototype {
        Prototype::new(weights.to_vec(), Tag::for_cycle(1), 1)
    }

    #[test]
    fn complement_code_doubles_and_clamps() {
        assert_eq!(complement_code(&[0.2, 1.4, -0.5]), vec![0.2, 1.0, 0.0, 0.8, 0.0, 1.0]);
    }

    #[test]
    fn complement_coded_norm_is_constant() {
        let a: f64 = complement_code(&[0.1, 0.7, 0.3]).iter().sum();
        let b: f64 = complement_code(&[0.9, 0.0, 0.5]).iter().sum();
        assert!((a - 3.0).abs() < 1e-12);
        assert!((b - 3.0).abs() < 1e-12);
    }

    #[test]
    fn identical_prototype_matches_fully() {
        let scorer = FuzzyArtScorer::new(0.01);
        let input = complement_code(&[0.3, 0.6]);
        let m = scorer.match_scores(&input, &[proto(&input)]);
        assert!((m[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn choice_prefers_tighter_prototype() {
        let scorer = FuzzyArtScorer::new(0.01);
        let input = [0.5, 0.5];
        // Both contain the input's minimum, the smaller one is a tighter fit.
        let t = scorer.choice(&input, &[proto(&[1.0, 1.0]), proto(&[0.5, 0.5])]);
        assert!(t[1] > t[0], "expected tighter prototype to win: {t:?}");
    }

    #[test]
    fn one_score_per_prototype() {
        let scorer = FuzzyArtScorer::new(0.01);
        let protos = [proto(&[0.1, 0.9]), proto(&[0.5, 0.5]), proto(&[0.9, 0.1])];
        assert_eq!(scorer.choice(&[0.4, 0.6], &protos).len(), 3);
        assert_eq!(scorer.match_scores(&[0.4, 0.6], &protos).len(), 3);
    }

    #[test]
    fn zero_input_matches_nothing() {
        let scorer = FuzzyArtScorer::new(0.01);
        let m = scorer.match_scores(&[0.0, 0.0], &[proto(&[0.5, 0.5])]);
        assert_eq!(m, vec![0.0]);
    }

    #[test]
    fn negative_components_never_inflate_match() {
        let scorer = FuzzyArtScorer::new(0.01);
        let m = scorer.match_scores(&[-0.1], &[proto(&[-5.0])]);
        assert_eq!(m, vec![0.0]);

        // Only the positive part of the input counts towards |I|.
        let m = scorer.match_scores(&[0.5, -1.0], &[proto(&[0.25, 2.0])]);
        assert!((m[0] - 0.5).abs() < 1e-12);
        assert!((fuzzy_and_norm(&[-3.0, 0.2], &[-1.0, 0.4]) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn raw_rows_keep_match_within_unit_range() {
        let scorer = FuzzyArtScorer::new(0.01);
        let protos = [proto(&[-2.0, 3.0]), proto(&[4.0, -0.5]), proto(&[0.0, 0.0])];
        for input in [[-1.0, 2.5], [3.0, -7.0], [0.2, 0.9]] {
            for m in scorer.match_scores(&input, &protos) {
                assert!((0.0..=1.0).contains(&m), "match {m} out of range for {input:?}");
            }
        }
    }
}
