//! Topology snapshot: a read-only view for external renderers.
//!
//! Captures every prototype as a node annotated with its connected
//! component and a color shared by that component, plus the edge list.
//! Renderers consume the snapshot (usually as JSON); nothing here can
//! mutate the network.

use crate::engine::{EngineStats, StreamingTopoArt};
use serde::Serialize;
use std::collections::HashMap;
use topoart_core::scoring::ResonanceScorer;
use topoart_core::topology::TopologyGraph;
use topoart_core::types::{Cycle, Tag};

/// A serializable snapshot of a prototype node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub tag: Tag,
    pub birth: Cycle,
    pub lastactive: Cycle,
    pub counter: u64,
    pub component: usize,
    /// `#rrggbb`, shared by every node of the component.
    pub color: String,
}

/// A serializable snapshot of a topology edge.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    pub source: Tag,
    pub target: Tag,
}

/// A complete serializable snapshot of the topology at one cycle.
#[derive(Debug, Clone, Serialize)]
pub struct TopologySnapshot {
    pub cycle: Cycle,
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
    pub components: Vec<Vec<Tag>>,
    pub stats: EngineStats,
}

impl TopologySnapshot {
    pub fn capture<S: ResonanceScorer, G: TopologyGraph>(net: &StreamingTopoArt<S, G>) -> Self {
        let components = net.connected_components();
        let colors = component_colors(components.len());
        let component_of: HashMap<&Tag, usize> = components
            .iter()
            .enumerate()
            .flat_map(|(i, members)| members.iter().map(move |tag| (tag, i)))
            .collect();

        let nodes = net
            .prototypes()
            .iter()
            .map(|p| {
                let component = component_of.get(&p.tag).copied().unwrap_or_default();
                NodeSnapshot {
                    tag: p.tag.clone(),
                    birth: p.birth,
                    lastactive: p.lastactive,
                    counter: p.counter,
                    component,
                    color: colors.get(component).cloned().unwrap_or_default(),
                }
            })
            .collect();

        let edges = net
            .graph()
            .all_edges()
            .into_iter()
            .map(|(source, target)| EdgeSnapshot { source, target })
            .collect();

        Self {
            cycle: net.cycle(),
            nodes,
            edges,
            stats: net.stats(),
            components,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `n` distinct colors with evenly spaced hues, as `#rrggbb`.
pub fn component_colors(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let (r, g, b) = hsv_to_rgb(i as f64 / n as f64, 0.65, 0.9);
            format!("#{r:02x}{g:02x}{b:02x}")
        })
        .collect()
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as i64 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    (byte(r), byte(g), byte(b))
}
