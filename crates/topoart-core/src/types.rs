//! Shared types used across the TopoART crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Learning cycle index. One cycle elapses per input presented.
pub type Cycle = u64;

/// Unique, immutable identifier of a prototype and of its graph node.
///
/// Tags are derived from the cycle in which the prototype was created,
/// so they are never reused within one engine's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// Tag for a prototype born in `cycle` (`"p<cycle>"`).
    pub fn for_cycle(cycle: Cycle) -> Self {
        Self(format!("p{cycle}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A cluster prototype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    /// Weight vector, same dimension as the encoded input.
    pub weights: Vec<f64>,
    pub tag: Tag,
    /// Cycle in which the prototype was created.
    pub birth: Cycle,
    /// Last cycle in which the prototype won (first or second).
    pub lastactive: Cycle,
    /// Number of cycles this prototype was the first winner. Diagnostic only.
    pub counter: u64,
}

impl Prototype {
    pub fn new(weights: Vec<f64>, tag: Tag, birth: Cycle) -> Self {
        Self {
            weights,
            tag,
            birth,
            lastactive: birth,
            counter: 0,
        }
    }

    /// Cycles elapsed since this prototype last won.
    pub fn idle_for(&self, cycle: Cycle) -> Cycle {
        cycle.saturating_sub(self.lastactive)
    }

    /// Fuzzy-min learning: `w <- (1 - rate) * w + rate * min(input, w)`.
    pub fn learn_fuzzy_min(&mut self, input: &[f64], rate: f64) {
        for (w, &x) in self.weights.iter_mut().zip(input) {
            *w = (1.0 - rate) * *w + rate * x.min(*w);
        }
    }

    /// L1 norm of the weight vector.
    pub fn magnitude(&self) -> f64 {
        self.weights.iter().map(|w| w.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_derives_from_cycle() {
        assert_eq!(Tag::for_cycle(1).as_str(), "p1");
        assert_eq!(Tag::for_cycle(42).to_string(), "p42");
    }

    #[test]
    fn new_prototype_is_active_at_birth() {
        let p = Prototype::new(vec![0.5, 0.5], Tag::for_cycle(3), 3);
        assert_eq!(p.lastactive, 3);
        assert_eq!(p.counter, 0);
        assert_eq!(p.idle_for(10), 7);
    }

    #[test]
    fn fuzzy_min_moves_toward_elementwise_minimum() {
        let mut p = Prototype::new(vec![0.8, 0.2, 0.5], Tag::for_cycle(1), 1);
        p.learn_fuzzy_min(&[0.4, 0.6, 0.5], 0.5);
        // min = [0.4, 0.2, 0.5]
        let expected = [0.6, 0.2, 0.5];
        for (w, e) in p.weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12, "got {w}, expected {e}");
        }
    }

    #[test]
    fn zero_rate_leaves_weights_unchanged() {
        let mut p = Prototype::new(vec![0.3, 0.9], Tag::for_cycle(1), 1);
        p.learn_fuzzy_min(&[0.0, 0.0], 0.0);
        assert_eq!(p.weights, vec![0.3, 0.9]);
    }
}
