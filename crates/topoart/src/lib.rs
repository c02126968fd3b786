//! # TopoART
//!
//! Streaming TopoART: an online clustering network from the Adaptive
//! Resonance Theory family. It consumes feature vectors one at a time,
//! grows and forgets prototype clusters, and learns a topology graph
//! linking clusters that resonate together.
//!
//! ## Quick Start
//!
//! ```rust
//! use topoart::prelude::*;
//!
//! let config = TopoArtConfig::default()
//!     .with_vigilance(0.85)
//!     .with_pruning(50, 100);
//! let mut net = StreamingTopoArt::new(config).unwrap();
//!
//! for x in [0.1, 0.3, 0.2, 0.9] {
//!     net.learn(&complement_code(&[x])).unwrap();
//! }
//!
//! // 0.2 resonated with both 0.1 and 0.3, linking them.
//! assert_eq!(net.connected_components().len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`topoart_core`] - Shared types, the `TopologyGraph` and
//!   `ResonanceScorer` traits, configuration, errors
//! - [`topoart_runtime`] - Prototype store, resonance engine, petgraph
//!   topology, pruning policy, snapshots
//!
//! ## Learning Cycle
//!
//! | Step | What happens |
//! |------|--------------|
//! | Choice | Every prototype is scored against the input |
//! | First winner | Highest choice whose match passes vigilance learns at `beta` |
//! | Second winner | Next resonant prototype learns at `beta2`; an edge links the two |
//! | Creation | No resonance at all: the input becomes a new prototype |
//! | Pruning | After `tau` cycles, prototypes idle for more than `phi` cycles are removed |

// Re-export all subcrates
pub use topoart_core as core;
pub use topoart_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use topoart::prelude::*;
/// ```
pub mod prelude {
    pub use topoart_runtime::prelude::*;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
