//! TopoART Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use topoart_runtime::prelude::*;
//! ```

// Re-export the engine
pub use crate::engine::{Classification, EngineStats, LearnOutcome, StreamingTopoArt};

// Re-export store, graph backend and pruning
pub use crate::store::PrototypeStore;
pub use crate::topology_impl::PetTopologyGraph;
pub use crate::pruning::PruningPolicy;

// Re-export snapshots
pub use crate::export::{component_colors, EdgeSnapshot, NodeSnapshot, TopologySnapshot};

// Re-export from core
pub use topoart_core::prelude::*;
