//! Network configuration.
//!
//! Four resonance parameters and two pruning-schedule parameters, fixed
//! at construction. Out-of-range values are rejected up front rather
//! than discovered on the first learning call.

use crate::error::{ConfigError, Result, TopoArtError};
use serde::{Deserialize, Serialize};

/// Configuration for a Streaming TopoART network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopoArtConfig {
    /// Minimum match score for resonance, in [0, 1] (default: 0.75).
    pub vigilance: f64,
    /// Choice parameter of the scorer, > 0 (default: 0.001).
    pub alpha: f64,
    /// First-winner learning rate, in [0, 1] (default: 1.0).
    pub beta: f64,
    /// Second-winner learning rate, in [0, 1] (default: 0.6).
    pub beta2: f64,
    /// Cycles without a win before a prototype is stale (default: 100).
    pub phi: u64,
    /// Warm-up cycles before pruning starts (default: 200).
    pub tau: u64,
    /// Fixed input dimension. When unset, the first input establishes it.
    pub dimension: Option<usize>,
}

impl Default for TopoArtConfig {
    fn default() -> Self {
        Self {
            vigilance: 0.75,
            alpha: 0.001,
            beta: 1.0,
            beta2: 0.6,
            phi: 100,
            tau: 200,
            dimension: None,
        }
    }
}

impl TopoArtConfig {
    pub fn with_vigilance(mut self, vigilance: f64) -> Self {
        self.vigilance = vigilance;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set both learning rates.
    pub fn with_learning_rates(mut self, beta: f64, beta2: f64) -> Self {
        self.beta = beta;
        self.beta2 = beta2;
        self
    }

    /// Set staleness threshold `phi` and warm-up `tau`.
    pub fn with_pruning(mut self, phi: u64, tau: u64) -> Self {
        self.phi = phi;
        self.tau = tau;
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        check_unit("vigilance", self.vigilance)?;
        check_finite("alpha", self.alpha)?;
        if self.alpha <= 0.0 {
            return Err(TopoArtError::invalid_config(
                "alpha",
                format!("{} (must be greater than 0)", self.alpha),
            ));
        }
        check_unit("beta", self.beta)?;
        check_unit("beta2", self.beta2)?;
        if self.dimension == Some(0) {
            return Err(TopoArtError::invalid_config("dimension", "must be at least 1"));
        }
        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            field: field.to_string(),
        }
        .into())
    }
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TopoArtError::out_of_range(field, 0.0, 1.0, value))
    }
}
