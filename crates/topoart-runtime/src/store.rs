//! Prototype store: the network's categories and their graph mirror.
//!
//! The store owns the topology graph so that every mutation touches both
//! sides together: the set of stored tags always equals the graph's
//! node set.

use crate::topology_impl::PetTopologyGraph;
use topoart_core::error::{Result, TopoArtError};
use topoart_core::topology::TopologyGraph;
use topoart_core::types::{Cycle, Prototype, Tag};

/// Ordered prototype collection (creation order) kept in lockstep with
/// a topology graph.
#[derive(Debug, Clone)]
pub struct PrototypeStore<G: TopologyGraph = PetTopologyGraph> {
    prototypes: Vec<Prototype>,
    graph: G,
}

impl PrototypeStore<PetTopologyGraph> {
    pub fn new() -> Self {
        Self::with_graph(PetTopologyGraph::new())
    }
}

impl Default for PrototypeStore<PetTopologyGraph> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TopologyGraph> PrototypeStore<G> {
    /// Create a store over an empty graph backend.
    pub fn with_graph(graph: G) -> Self {
        Self {
            prototypes: Vec::new(),
            graph,
        }
    }

    /// Store a new prototype and mirror it as an isolated graph node.
    ///
    /// A tag already present in either the store or the graph is
    /// rejected before anything changes.
    pub fn append(&mut self, weights: Vec<f64>, tag: Tag, birth: Cycle) -> Result<&Prototype> {
        if self.contains(&tag) {
            return Err(TopoArtError::DuplicateTag(tag));
        }
        self.graph.add_node(tag.clone());
        self.prototypes.push(Prototype::new(weights, tag, birth));
        Ok(&self.prototypes[self.prototypes.len() - 1])
    }

    /// Remove every prototype idle for more than `phi` cycles, along with
    /// its graph node and incident edges. Returns removed tags in store
    /// order.
    pub fn remove_stale(&mut self, cycle: Cycle, phi: u64) -> Vec<Tag> {
        let mut removed = Vec::new();
        self.prototypes.retain(|p| {
            if p.idle_for(cycle) > phi {
                removed.push(p.tag.clone());
                false
            } else {
                true
            }
        });
        self.graph.remove_nodes(&removed);
        removed
    }

    /// Record an edge between two stored prototypes.
    pub fn connect(&mut self, a: &Tag, b: &Tag) -> bool {
        self.graph.add_edge(a, b)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Whether `tag` is taken in either the store or the graph.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.graph.contains_node(tag) || self.position(tag).is_some()
    }

    pub fn get(&self, tag: &Tag) -> Option<&Prototype> {
        self.position(tag).map(|i| &self.prototypes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.iter()
    }

    /// Prototypes in creation order. Scorers index into this slice.
    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    pub(crate) fn prototype_mut(&mut self, index: usize) -> &mut Prototype {
        &mut self.prototypes[index]
    }

    /// Read-only view of the topology graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn position(&self, tag: &Tag) -> Option<usize> {
        self.prototypes.iter().position(|p| &p.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(store: &PrototypeStore) -> Vec<Tag> {
        store.iter().map(|p| p.tag.clone()).collect()
    }

    #[test]
    fn append_mirrors_into_graph() {
        let mut store = PrototypeStore::new();
        let p = store.append(vec![0.1, 0.9], Tag::for_cycle(1), 1).unwrap();
        assert_eq!(p.tag, Tag::for_cycle(1));

        assert_eq!(store.len(), 1);
        assert!(store.graph().contains_node(&Tag::for_cycle(1)));
        assert_eq!(store.graph().edge_count(), 0);
    }

    #[test]
    fn duplicate_tag_leaves_store_untouched() {
        let mut store = PrototypeStore::new();
        store.append(vec![0.1], Tag::for_cycle(1), 1).unwrap();
        let err = store.append(vec![0.5], Tag::for_cycle(1), 2).unwrap_err();

        assert_eq!(err, TopoArtError::DuplicateTag(Tag::for_cycle(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.graph().node_count(), 1);
        assert_eq!(store.get(&Tag::for_cycle(1)).unwrap().weights, vec![0.1]);
    }

    #[test]
    fn remove_stale_does_not_skip_adjacent_entries() {
        let mut store = PrototypeStore::new();
        for cycle in 1..=5 {
            store.append(vec![0.5], Tag::for_cycle(cycle), cycle).unwrap();
        }
        store.prototype_mut(2).lastactive = 10;
        store.connect(&Tag::for_cycle(2), &Tag::for_cycle(3));

        // p1, p2 are consecutive stale entries; so are p4, p5.
        let removed = store.remove_stale(10, 3);

        assert_eq!(
            removed,
            vec![Tag::for_cycle(1), Tag::for_cycle(2), Tag::for_cycle(4), Tag::for_cycle(5)]
        );
        assert_eq!(tags(&store), vec![Tag::for_cycle(3)]);
        assert_eq!(store.graph().all_nodes(), vec![Tag::for_cycle(3)]);
        assert_eq!(store.graph().edge_count(), 0);
    }

    #[test]
    fn staleness_threshold_is_strict() {
        let mut store = PrototypeStore::new();
        store.append(vec![0.5], Tag::for_cycle(1), 1).unwrap();
        assert!(store.remove_stale(4, 3).is_empty());
        assert_eq!(store.remove_stale(5, 3), vec![Tag::for_cycle(1)]);
    }
}
