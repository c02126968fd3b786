//! # TopoART Core
//!
//! Core traits and types for Streaming TopoART, an online clustering
//! network from the Adaptive Resonance Theory family that learns a
//! topology over its clusters while it learns the clusters themselves.
//!
//! This crate defines the pieces every engine implementation shares:
//!
//! - **Prototype** - a cluster's weight vector plus its lifecycle bookkeeping
//! - **TopologyGraph** - undirected co-activation graph over prototype tags
//! - **ResonanceScorer** - the choice/match functions of the base ART layer
//! - **TopoArtConfig** - vigilance, choice, learning-rate and pruning parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use topoart_core::prelude::*;
//!
//! let config = TopoArtConfig::default().with_vigilance(0.8);
//! assert!(config.validate().is_ok());
//!
//! let coded = complement_code(&[0.25, 1.0]);
//! assert_eq!(coded, vec![0.25, 1.0, 0.75, 0.0]);
//! ```

pub mod types;
pub mod topology;
pub mod scoring;
pub mod config;
pub mod error;
pub mod prelude;
