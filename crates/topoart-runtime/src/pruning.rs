//! Pruning policy: time-based structural forgetting.
//!
//! Prototypes that have not won resonance for more than `phi` cycles are
//! treated as noise or transient structure and removed together with
//! their graph nodes. Nothing is pruned until the warm-up period `tau`
//! has elapsed.

use crate::store::PrototypeStore;
use topoart_core::topology::TopologyGraph;
use topoart_core::types::{Cycle, Tag};
use tracing::info;

/// Staleness-based pruning schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruningPolicy {
    /// Maximum idle cycles before a prototype is stale.
    pub phi: u64,
    /// Warm-up: pruning runs only once `cycle > tau`.
    pub tau: u64,
}

impl PruningPolicy {
    pub fn new(phi: u64, tau: u64) -> Self {
        Self { phi, tau }
    }

    /// Whether the warm-up period is over at `cycle`.
    pub fn should_prune(&self, cycle: Cycle) -> bool {
        cycle > self.tau
    }

    /// Remove every prototype with `cycle - lastactive > phi`.
    ///
    /// Callers check [`should_prune`](Self::should_prune) first.
    pub fn prune<G: TopologyGraph>(&self, store: &mut PrototypeStore<G>, cycle: Cycle) -> Vec<Tag> {
        let removed = store.remove_stale(cycle, self.phi);
        if !removed.is_empty() {
            info!(
                cycle,
                removed = removed.len(),
                remaining = store.len(),
                "pruned stale prototypes"
            );
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_is_exclusive() {
        let policy = PruningPolicy::new(5, 10);
        assert!(!policy.should_prune(0));
        assert!(!policy.should_prune(10));
        assert!(policy.should_prune(11));
    }

    #[test]
    fn prune_removes_only_stale_prototypes() {
        let mut store = PrototypeStore::new();
        store.append(vec![0.2], Tag::for_cycle(1), 1).unwrap();
        store.append(vec![0.8], Tag::for_cycle(9), 9).unwrap();

        let removed = PruningPolicy::new(5, 0).prune(&mut store, 10);

        assert_eq!(removed, vec![Tag::for_cycle(1)]);
        assert_eq!(store.len(), 1);
        assert!(store.graph().contains_node(&Tag::for_cycle(9)));
        assert!(!store.graph().contains_node(&Tag::for_cycle(1)));
    }
}
