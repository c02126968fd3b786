//! Concrete implementation of the TopologyGraph trait using petgraph.
//!
//! Uses petgraph's `StableGraph` as the backing store so node indices
//! survive removals, with a HashMap index for O(1) lookup by tag.
//! Connected components come from petgraph's union-find.

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};
use std::collections::HashMap;
use topoart_core::topology::TopologyGraph;
use topoart_core::types::Tag;

/// Node payload. `seq` records insertion order, since a stable graph
/// recycles vacated indices.
#[derive(Debug, Clone)]
struct Node {
    tag: Tag,
    seq: u64,
}

/// Petgraph-backed implementation of the topology graph.
#[derive(Debug, Clone, Default)]
pub struct PetTopologyGraph {
    graph: StableUnGraph<Node, ()>,
    /// Map from tag to petgraph's internal index.
    node_index: HashMap<Tag, NodeIndex>,
    next_seq: u64,
}

impl PetTopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn pair(&self, a: &Tag, b: &Tag) -> Option<(NodeIndex, NodeIndex)> {
        Some((*self.node_index.get(a)?, *self.node_index.get(b)?))
    }

    /// Node indices sorted by insertion order.
    fn ordered_indices(&self) -> Vec<NodeIndex> {
        let mut indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        indices.sort_by_key(|&idx| self.graph[idx].seq);
        indices
    }
}

impl TopologyGraph for PetTopologyGraph {
    fn add_node(&mut self, tag: Tag) {
        if self.node_index.contains_key(&tag) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let idx = self.graph.add_node(Node {
            tag: tag.clone(),
            seq,
        });
        self.node_index.insert(tag, idx);
    }

    fn add_edge(&mut self, a: &Tag, b: &Tag) -> bool {
        let Some((a_idx, b_idx)) = self.pair(a, b) else {
            return false;
        };
        if a_idx == b_idx || self.graph.find_edge(a_idx, b_idx).is_some() {
            return false;
        }
        self.graph.add_edge(a_idx, b_idx, ());
        true
    }

    fn remove_nodes(&mut self, tags: &[Tag]) {
        for tag in tags {
            if let Some(idx) = self.node_index.remove(tag) {
                // Incident edges go with the node.
                self.graph.remove_node(idx);
            }
        }
    }

    fn contains_node(&self, tag: &Tag) -> bool {
        self.node_index.contains_key(tag)
    }

    fn has_edge(&self, a: &Tag, b: &Tag) -> bool {
        self.pair(a, b)
            .is_some_and(|(a_idx, b_idx)| self.graph.find_edge(a_idx, b_idx).is_some())
    }

    fn neighbors(&self, tag: &Tag) -> Vec<Tag> {
        let Some(&idx) = self.node_index.get(tag) else {
            return Vec::new();
        };
        let mut neighbors: Vec<&Node> = self.graph.neighbors(idx).map(|n| &self.graph[n]).collect();
        neighbors.sort_by_key(|n| n.seq);
        neighbors.into_iter().map(|n| n.tag.clone()).collect()
    }

    fn all_nodes(&self) -> Vec<Tag> {
        self.ordered_indices()
            .into_iter()
            .map(|idx| self.graph[idx].tag.clone())
            .collect()
    }

    fn all_edges(&self) -> Vec<(Tag, Tag)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].tag.clone(),
                    self.graph[e.target()].tag.clone(),
                )
            })
            .collect()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn connected_components(&self) -> Vec<Vec<Tag>> {
        // Stable indices may have holes after removals; size by the bound.
        let mut sets = UnionFind::<usize>::new(self.graph.node_bound());
        for edge in self.graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<Tag>> = Vec::new();
        for idx in self.ordered_indices() {
            let root = sets.find(idx.index());
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(self.graph[idx].tag.clone());
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> Tag {
        Tag::from(s)
    }

    fn graph_with(nodes: &[&str]) -> PetTopologyGraph {
        let mut graph = PetTopologyGraph::new();
        for n in nodes {
            graph.add_node(tag(n));
        }
        graph
    }

    #[test]
    fn add_and_query_nodes() {
        let graph = graph_with(&["p1", "p2"]);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains_node(&tag("p1")));
        assert!(!graph.contains_node(&tag("p3")));
        assert_eq!(graph.all_nodes(), vec![tag("p1"), tag("p2")]);
    }

    #[test]
    fn adding_existing_node_is_a_no_op() {
        let mut graph = graph_with(&["p1"]);
        graph.add_node(tag("p1"));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn edges_are_undirected_and_idempotent() {
        let mut graph = graph_with(&["p1", "p2"]);
        assert!(graph.add_edge(&tag("p1"), &tag("p2")));
        assert!(!graph.add_edge(&tag("p1"), &tag("p2")));
        assert!(!graph.add_edge(&tag("p2"), &tag("p1")));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&tag("p2"), &tag("p1")));
    }

    #[test]
    fn edges_to_unknown_nodes_and_self_loops_are_ignored() {
        let mut graph = graph_with(&["p1"]);
        assert!(!graph.add_edge(&tag("p1"), &tag("p9")));
        assert!(!graph.add_edge(&tag("p1"), &tag("p1")));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn removing_nodes_drops_incident_edges() {
        let mut graph = graph_with(&["p1", "p2", "p3"]);
        graph.add_edge(&tag("p1"), &tag("p2"));
        graph.add_edge(&tag("p2"), &tag("p3"));
        graph.remove_nodes(&[tag("p2"), tag("p7")]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(&tag("p1")).is_empty());
    }

    #[test]
    fn indices_stay_valid_after_removal() {
        let mut graph = graph_with(&["p1", "p2", "p3", "p4"]);
        graph.remove_nodes(&[tag("p1")]);
        assert!(graph.add_edge(&tag("p3"), &tag("p4")));
        assert!(graph.has_edge(&tag("p4"), &tag("p3")));
        assert_eq!(graph.neighbors(&tag("p4")), vec![tag("p3")]);
    }

    #[test]
    fn recycled_slots_keep_insertion_order() {
        let mut graph = graph_with(&["p1", "p2", "p3"]);
        graph.remove_nodes(&[tag("p1")]);
        graph.add_node(tag("p4"));
        graph.add_edge(&tag("p4"), &tag("p2"));

        assert_eq!(graph.all_nodes(), vec![tag("p2"), tag("p3"), tag("p4")]);
        assert_eq!(
            graph.connected_components(),
            vec![vec![tag("p2"), tag("p4")], vec![tag("p3")]]
        );
    }

    #[test]
    fn connected_components_follow_edges() {
        let mut graph = graph_with(&["p1", "p2", "p3", "p4", "p5"]);
        graph.add_edge(&tag("p1"), &tag("p3"));
        graph.add_edge(&tag("p4"), &tag("p5"));

        let components = graph.connected_components();
        assert_eq!(
            components,
            vec![
                vec![tag("p1"), tag("p3")],
                vec![tag("p2")],
                vec![tag("p4"), tag("p5")],
            ]
        );
    }

    #[test]
    fn components_after_removal_split_the_graph() {
        let mut graph = graph_with(&["p1", "p2", "p3"]);
        graph.add_edge(&tag("p1"), &tag("p2"));
        graph.add_edge(&tag("p2"), &tag("p3"));
        assert_eq!(graph.connected_components().len(), 1);

        graph.remove_nodes(&[tag("p2")]);
        assert_eq!(
            graph.connected_components(),
            vec![vec![tag("p1")], vec![tag("p3")]]
        );
    }

    #[test]
    fn empty_graph_has_no_components() {
        assert!(PetTopologyGraph::new().connected_components().is_empty());
    }
}
