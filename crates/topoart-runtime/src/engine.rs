//! Streaming TopoART: the resonance engine.
//!
//! The engine owns the prototype store, the topology graph (through the
//! store) and the cycle counter. Each call to [`StreamingTopoArt::learn`]
//! is one cycle:
//!
//! 1. The cycle counter advances
//! 2. An empty network adopts the input as its first prototype
//! 3. Otherwise the scorer rates every prototype (choice `T`, match `M`)
//! 4. First-winner search: highest `T` first, accepted if `M >= vigilance`
//! 5. If a first winner resonated, the same search picks a second winner
//!    and an edge joins the two in the topology graph
//! 6. If nothing resonated, the input becomes a new prototype
//! 7. Past the warm-up period, stale prototypes are pruned
//!
//! Validation, scoring, the winner search and the new tag's availability
//! are all settled before step 1, so a failed call leaves the network
//! exactly as it was.

use crate::pruning::PruningPolicy;
use crate::store::PrototypeStore;
use crate::topology_impl::PetTopologyGraph;
use serde::Serialize;
use topoart_core::config::TopoArtConfig;
use topoart_core::error::{Result, TopoArtError};
use topoart_core::scoring::{FuzzyArtScorer, ResonanceScorer};
use topoart_core::topology::TopologyGraph;
use topoart_core::types::{Cycle, Prototype, Tag};
use tracing::debug;

/// What happened during one learning cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearnOutcome {
    pub cycle: Cycle,
    pub first_winner: Option<Tag>,
    pub second_winner: Option<Tag>,
    /// Tag of the prototype created this cycle, if any.
    pub created: Option<Tag>,
    /// Whether a new topology edge was added.
    pub new_edge: bool,
    /// Tags removed by pruning this cycle.
    pub pruned: Vec<Tag>,
}

/// Result of a read-only classification query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub tag: Tag,
    pub choice: f64,
    pub match_score: f64,
    /// Index into [`StreamingTopoArt::connected_components`].
    pub component: usize,
}

/// Statistics about the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub cycle: Cycle,
    pub prototypes: usize,
    pub edges: usize,
    pub components: usize,
    pub total_created: u64,
    pub total_pruned: u64,
}

/// Online topology-learning ART network over a single input stream.
pub struct StreamingTopoArt<S: ResonanceScorer = FuzzyArtScorer, G: TopologyGraph = PetTopologyGraph> {
    config: TopoArtConfig,
    scorer: S,
    store: PrototypeStore<G>,
    pruning: PruningPolicy,
    cycle: Cycle,
    /// Established input dimension.
    dimension: Option<usize>,
    total_created: u64,
    total_pruned: u64,
}

impl StreamingTopoArt<FuzzyArtScorer, PetTopologyGraph> {
    /// Create a network with fuzzy ART scoring and the petgraph backend.
    pub fn new(config: TopoArtConfig) -> Result<Self> {
        let scorer = FuzzyArtScorer::new(config.alpha);
        Self::with_parts(config, scorer, PetTopologyGraph::new())
    }
}

impl<S: ResonanceScorer, G: TopologyGraph> StreamingTopoArt<S, G> {
    /// Create a network from a custom scorer and an empty graph backend.
    pub fn with_parts(config: TopoArtConfig, scorer: S, graph: G) -> Result<Self> {
        config.validate()?;
        if graph.node_count() != 0 {
            return Err(TopoArtError::invalid_config(
                "graph",
                "topology backend must start empty",
            ));
        }
        Ok(Self {
            pruning: PruningPolicy::new(config.phi, config.tau),
            dimension: config.dimension,
            config,
            scorer,
            store: PrototypeStore::with_graph(graph),
            cycle: 0,
            total_created: 0,
            total_pruned: 0,
        })
    }

    /// Present one input and learn from it.
    pub fn learn(&mut self, input: &[f64]) -> Result<LearnOutcome> {
        self.check_input(input)?;
        let (first, second) = if self.store.is_empty() {
            (None, None)
        } else {
            let (choice, matched) = self.score(input)?;
            let mut search = WinnerSearch::new(choice, &matched, self.config.vigilance);
            let first = search.next_winner();
            (first, first.and_then(|_| search.next_winner()))
        };
        let new_tag = Tag::for_cycle(self.cycle + 1);
        if first.is_none() && self.store.contains(&new_tag) {
            return Err(TopoArtError::DuplicateTag(new_tag));
        }

        self.cycle += 1;
        self.dimension = Some(input.len());
        let cycle = self.cycle;
        let mut outcome = LearnOutcome {
            cycle,
            first_winner: None,
            second_winner: None,
            created: None,
            new_edge: false,
            pruned: Vec::new(),
        };

        if let Some(first) = first {
            let first_tag = {
                let p = self.store.prototype_mut(first);
                p.learn_fuzzy_min(input, self.config.beta);
                p.counter += 1;
                p.lastactive = cycle;
                p.tag.clone()
            };

            if let Some(second) = second {
                let second_tag = {
                    let p = self.store.prototype_mut(second);
                    p.learn_fuzzy_min(input, self.config.beta2);
                    p.lastactive = cycle;
                    p.tag.clone()
                };
                outcome.new_edge = self.store.connect(&first_tag, &second_tag);
                outcome.second_winner = Some(second_tag);
            }
            outcome.first_winner = Some(first_tag);
        } else {
            self.store.append(input.to_vec(), new_tag.clone(), cycle)?;
            self.total_created += 1;
            debug!(cycle, tag = %new_tag, "created prototype");
            outcome.created = Some(new_tag);
        }

        if self.pruning.should_prune(cycle) {
            outcome.pruned = self.pruning.prune(&mut self.store, cycle);
            self.total_pruned += outcome.pruned.len() as u64;
        }

        debug!(
            cycle,
            first = ?outcome.first_winner,
            second = ?outcome.second_winner,
            created = ?outcome.created,
            new_edge = outcome.new_edge,
            prototypes = self.store.len(),
            "learning cycle complete"
        );
        Ok(outcome)
    }

    /// Learn a sequence of inputs in order, stopping at the first error.
    pub fn learn_all<'a, I>(&mut self, inputs: I) -> Result<Vec<LearnOutcome>>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        inputs.into_iter().map(|input| self.learn(input)).collect()
    }

    /// Find the prototype that would win for `input`, without learning.
    ///
    /// The cycle counter and all prototypes are left untouched.
    pub fn classify(&self, input: &[f64]) -> Result<Option<Classification>> {
        self.check_input(input)?;
        if self.store.is_empty() {
            return Ok(None);
        }
        let (choice, matched) = self.score(input)?;
        let mut search = WinnerSearch::new(choice.clone(), &matched, self.config.vigilance);
        let Some(winner) = search.next_winner() else {
            return Ok(None);
        };

        let tag = self.store.prototypes()[winner].tag.clone();
        let component = self
            .connected_components()
            .iter()
            .position(|members| members.contains(&tag))
            .unwrap_or_default();
        Ok(Some(Classification {
            tag,
            choice: choice[winner],
            match_score: matched[winner],
            component,
        }))
    }

    /// Connected components of the topology graph, as tag groups.
    pub fn connected_components(&self) -> Vec<Vec<Tag>> {
        self.store.graph().connected_components()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            cycle: self.cycle,
            prototypes: self.store.len(),
            edges: self.store.graph().edge_count(),
            components: self.connected_components().len(),
            total_created: self.total_created,
            total_pruned: self.total_pruned,
        }
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Input dimension, once known.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn config(&self) -> &TopoArtConfig {
        &self.config
    }

    pub fn prototypes(&self) -> &[Prototype] {
        self.store.prototypes()
    }

    pub fn store(&self) -> &PrototypeStore<G> {
        &self.store
    }

    /// Read-only view of the topology graph.
    pub fn graph(&self) -> &G {
        self.store.graph()
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.is_empty() {
            return Err(TopoArtError::EmptyInput);
        }
        if let Some(expected) = self.dimension {
            if input.len() != expected {
                return Err(TopoArtError::DimensionMismatch {
                    expected,
                    found: input.len(),
                });
            }
        }
        if let Some(index) = input.iter().position(|x| !x.is_finite()) {
            return Err(TopoArtError::NonFiniteInput { index });
        }
        Ok(())
    }

    fn score(&self, input: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let prototypes = self.store.prototypes();
        let choice = self.scorer.choice(input, prototypes);
        let matched = self.scorer.match_scores(input, prototypes);
        if choice.len() != prototypes.len() || matched.len() != prototypes.len() {
            return Err(TopoArtError::ScorerLengthMismatch {
                expected: prototypes.len(),
                choice: choice.len(),
                matched: matched.len(),
            });
        }
        Ok((choice, matched))
    }
}

/// Committed winner search over one cycle's scores.
///
/// Each call to [`next_winner`](Self::next_winner) tries candidates in
/// descending choice order (ties to the lowest store index) and exhausts
/// every candidate it tries, whether or not it resonates.
struct WinnerSearch<'a> {
    /// Remaining choice scores; `None` once exhausted. NaN never competes.
    remaining: Vec<Option<f64>>,
    matched: &'a [f64],
    vigilance: f64,
}

impl<'a> WinnerSearch<'a> {
    fn new(choice: Vec<f64>, matched: &'a [f64], vigilance: f64) -> Self {
        Self {
            remaining: choice.into_iter().map(|t| (!t.is_nan()).then_some(t)).collect(),
            matched,
            vigilance,
        }
    }

    fn next_winner(&mut self) -> Option<usize> {
        while let Some(candidate) = self.best_remaining() {
            self.remaining[candidate] = None;
            if self.matched[candidate] >= self.vigilance {
                return Some(candidate);
            }
        }
        None
    }

    fn best_remaining(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, t) in self.remaining.iter().enumerate() {
            let Some(t) = *t else { continue };
            if best.map_or(true, |(_, b)| t > b) {
                best = Some((i, t));
            }
        }
        best.map(|(i, _)| i)
    }
}
