//! Rondo Core Library
//!
//! This crate provides the core functionality for the Rondo round-robin
//! scheduling simulator: process records and their arrival-ordered store,
//! the FIFO ready queue, the preemptive scheduling loop, metric accrual,
//! and workload ingestion/synthesis.
//!
//! The simulation is offline and deterministic: all process metadata is
//! known before the loop starts, a single logical clock advances
//! monotonically, and the same workload and quantum always produce
//! identical metrics.

pub mod config;
pub mod error;
pub mod metrics;
pub mod process;
pub mod queue;
pub mod scheduler;
pub mod seed;
pub mod workload;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use metrics::ScheduleMetrics;
pub use process::{Pid, Process, ProcessSet, Tick};
pub use scheduler::{ProcessOutcome, RoundRobinSim, SimOutcome, Slice};
