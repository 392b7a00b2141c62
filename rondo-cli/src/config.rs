//! Configuration file support for Rondo
//!
//! This module provides TOML-based profiles for reproducible simulations.
//! A profile pins the workload (a file or a seeded synthetic set), the
//! quantum, and the output destination, so a run can be reproduced from the
//! profile alone. CLI arguments remain available for quick overrides.

use anyhow::{bail, Context, Result};
use rondo_core::workload::{load_processes, SyntheticWorkload};
use rondo_core::{ProcessSet, Tick};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level profile configuration
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ProfileConfig {
    pub simulation: SimulationSection,
    pub workload: WorkloadSource,
    #[serde(default)]
    pub output: OutputSection,
}

/// Simulation metadata and parameters
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SimulationSection {
    /// Simulation name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Quantum length in ticks; must be positive
    pub quantum: Tick,
}

/// Where the process set comes from
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum WorkloadSource {
    /// A workload text file: count, then `pid arrival burst` triples
    File { path: PathBuf },
    /// A reproducible random set generated from a seed
    Synthetic {
        count: usize,
        #[serde(default)]
        seed: u64,
        /// Maximum gap between consecutive arrivals
        #[serde(default = "default_max_arrival_gap")]
        max_arrival_gap: Tick,
        /// Inclusive burst range
        #[serde(default = "default_burst_min")]
        burst_min: Tick,
        #[serde(default = "default_burst_max")]
        burst_max: Tick,
    },
}

fn default_max_arrival_gap() -> Tick {
    4
}

fn default_burst_min() -> Tick {
    1
}

fn default_burst_max() -> Tick {
    16
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct OutputSection {
    /// Optional JSON report destination
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Include the per-process table in reports
    #[serde(default)]
    pub per_process: bool,
}

impl ProfileConfig {
    /// Load a profile from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile: {}", path.display()))?;
        let config: ProfileConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse profile: {}", path.display()))?;
        Ok(config)
    }

    /// Validate cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.simulation.quantum == 0 {
            bail!("simulation.quantum must be a positive integer");
        }
        if let WorkloadSource::Synthetic { count, burst_min, burst_max, .. } = &self.workload {
            if *count == 0 {
                bail!("workload.count must be at least 1");
            }
            if *burst_min == 0 || burst_max < burst_min {
                bail!("workload burst range {burst_min}..={burst_max} is invalid");
            }
        }
        Ok(())
    }

    /// Materialize the process set this profile describes
    pub fn resolve_workload(&self) -> Result<ProcessSet> {
        match &self.workload {
            WorkloadSource::File { path } => load_processes(path),
            WorkloadSource::Synthetic {
                count,
                seed,
                max_arrival_gap,
                burst_min,
                burst_max,
            } => SyntheticWorkload::new(*count, *seed)
                .with_max_arrival_gap(*max_arrival_gap)
                .with_burst_range(*burst_min, *burst_max)
                .generate(),
        }
    }
}
