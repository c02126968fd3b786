//! TopoART Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use topoart_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{Cycle, Prototype, Tag};

// Re-export the TopologyGraph trait
pub use crate::topology::TopologyGraph;

// Re-export scoring
pub use crate::scoring::{complement_code, FuzzyArtScorer, ResonanceScorer};

// Re-export configuration
pub use crate::config::TopoArtConfig;

// Re-export error types
pub use crate::error::{ConfigError, Result, TopoArtError};
