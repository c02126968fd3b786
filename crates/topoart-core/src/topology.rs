//! Topology: the co-activation graph over prototypes.
//!
//! Nodes mirror prototype tags. An edge joins two prototypes that have
//! resonated together as first and second winner at least once.
//! Edges are never weakened; they disappear only with an endpoint.

use crate::types::Tag;

/// A handle to the topology graph.
///
/// This is a trait rather than a concrete type so that different
/// backends (adjacency list, union-find, ...) can be swapped in
/// without touching the learning engine.
pub trait TopologyGraph {
    /// Add an isolated node. Adding an existing tag has no effect.
    fn add_node(&mut self, tag: Tag);

    /// Add an undirected edge between two existing nodes.
    ///
    /// Returns `true` only if a new edge was created. Existing edges,
    /// self-loops and edges to unknown tags leave the graph unchanged.
    fn add_edge(&mut self, a: &Tag, b: &Tag) -> bool;

    /// Remove nodes and all incident edges. Unknown tags are ignored.
    fn remove_nodes(&mut self, tags: &[Tag]);

    /// Whether a node with this tag exists.
    fn contains_node(&self, tag: &Tag) -> bool;

    /// Whether an edge joins `a` and `b` (in either direction).
    fn has_edge(&self, a: &Tag, b: &Tag) -> bool;

    /// Tags adjacent to `tag`.
    fn neighbors(&self, tag: &Tag) -> Vec<Tag>;

    /// All node tags, in insertion order.
    fn all_nodes(&self) -> Vec<Tag>;

    /// All edges as tag pairs.
    fn all_edges(&self) -> Vec<(Tag, Tag)>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Connected components as groups of tags.
    ///
    /// Members keep node insertion order; components are ordered by
    /// their earliest member.
    fn connected_components(&self) -> Vec<Vec<Tag>>;
}
