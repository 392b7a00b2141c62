//! Round Robin scheduling loop
//!
//! The simulator drives a single logical clock over a fixed, arrival-sorted
//! process set. Each iteration dispatches the head of the FIFO ready queue
//! for at most one quantum, then either completes or requeues it.
//!
//! ## Architecture
//!
//! ```text
//! RoundRobinSim
//! ├── ProcessSet (arena: owns every record)
//! ├── ReadyQueue (FIFO of indices into the arena)
//! ├── admission cursor (next not-yet-arrived record)
//! └── MetricsAccumulator (response + waiting totals)
//! ```
//!
//! Per process the state machine is
//! `NOT_ARRIVED → READY → RUNNING → (READY | FINISHED)`, with `RUNNING`
//! transient within one loop iteration.
//!
//! ## Example
//!
//! ```
//! use rondo_core::config::SimConfig;
//! use rondo_core::process::{Process, ProcessSet};
//! use rondo_core::scheduler::RoundRobinSim;
//!
//! let set = ProcessSet::new(vec![
//!     Process::new(1, 0, 4),
//!     Process::new(2, 1, 3),
//! ])?;
//! let outcome = RoundRobinSim::new(set, SimConfig::new(2)?).run()?;
//! assert_eq!(outcome.metrics.process_count, 2);
//! # Ok::<(), rondo_core::Error>(())
//! ```

pub mod round_robin;

// Re-export main types
pub use round_robin::{ProcessOutcome, RoundRobinSim, SimOutcome, Slice};
