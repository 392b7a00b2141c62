//! Configuration types for Rondo core

use crate::error::{Error, Result};
use crate::process::Tick;
use serde::{Deserialize, Serialize};

/// Simulation parameters, validated before the scheduler loop runs
///
/// The quantum is fixed for the whole run. A zero quantum would make every
/// slice zero-length and the loop would never terminate, so it is rejected
/// here rather than checked inside the loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    quantum: Tick,
}

impl SimConfig {
    /// Create a config with the given quantum length
    ///
    /// # Returns
    /// Error if `quantum` is zero
    pub fn new(quantum: Tick) -> Result<Self> {
        if quantum == 0 {
            return Err(Error::Config("quantum must be a positive integer".to_string()));
        }
        Ok(Self { quantum })
    }

    /// Maximum CPU time granted per dispatch before preemption
    pub fn quantum(&self) -> Tick {
        self.quantum
    }
}
