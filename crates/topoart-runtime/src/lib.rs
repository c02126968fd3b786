//! # TopoART Runtime
//!
//! The learning side of Streaming TopoART: the prototype store, the
//! resonance engine that drives each cycle, the petgraph-backed topology
//! graph, and the staleness pruning policy.
//!
//! ```rust
//! use topoart_runtime::prelude::*;
//!
//! let mut net = StreamingTopoArt::new(TopoArtConfig::default()).unwrap();
//! let outcome = net.learn(&complement_code(&[0.2, 0.7])).unwrap();
//! assert_eq!(outcome.created, Some(Tag::for_cycle(1)));
//! ```

pub mod topology_impl;
pub mod store;
pub mod pruning;
pub mod engine;
pub mod export;
pub mod prelude;
