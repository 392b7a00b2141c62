//! Process records and the arrival-ordered process set
//!
//! A [`ProcessSet`] is the sole owner of every record for the lifetime of a
//! simulation. The ready queue and the scheduler refer to records by index
//! into the set, never by pointer, so removing a process from the queue can
//! never deallocate it and a record can be requeued any number of times.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Process identifier, unique within one simulation run
pub type Pid = u32;

/// Simulated time, in abstract integer ticks
pub type Tick = u64;

/// Identity and execution state of one simulated process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run
    pub arrival_time: Tick,
    /// Total CPU time required, fixed at creation
    pub burst_time: Tick,
    /// CPU time still required; reaches 0 exactly once, at completion
    pub remaining_time: Tick,
    /// False until the first dispatch; drives one-shot response accounting
    pub started: bool,
}

impl Process {
    /// Create a fresh record with `remaining_time = burst_time`
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            started: false,
        }
    }

    /// A process is finished once its remaining time hits zero
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

/// Arrival-ordered set of processes; owns every record for the whole run
///
/// Construction validates the invariants the scheduler depends on instead of
/// re-checking them inside the loop:
/// - at least one process,
/// - every `burst_time > 0` (remaining time must strictly decrease per
///   dispatch, which is the termination argument),
/// - pids unique,
/// - arrival times ascending (the scheduler admits arrivals with a
///   monotonically advancing cursor, which is only correct on sorted input).
#[derive(Debug, Clone)]
pub struct ProcessSet {
    records: Vec<Process>,
}

impl ProcessSet {
    /// Build a validated set from fresh records
    pub fn new(records: Vec<Process>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Workload("process set is empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for pair in records.windows(2) {
            if pair[1].arrival_time < pair[0].arrival_time {
                return Err(Error::Workload(format!(
                    "process {} arrives at {} after process {} at {}; input must be sorted by arrival time",
                    pair[1].pid, pair[1].arrival_time, pair[0].pid, pair[0].arrival_time
                )));
            }
        }
        for p in &records {
            if p.burst_time == 0 {
                return Err(Error::Workload(format!(
                    "process {} has zero burst time",
                    p.pid
                )));
            }
            if !seen.insert(p.pid) {
                return Err(Error::Workload(format!("duplicate pid {}", p.pid)));
            }
        }

        Ok(Self { records })
    }

    /// Number of processes in the set
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the set holds no processes (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shared view of a record by index
    pub fn get(&self, idx: usize) -> Option<&Process> {
        self.records.get(idx)
    }

    /// Mutable record access for the scheduler
    pub(crate) fn record_mut(&mut self, idx: usize) -> &mut Process {
        &mut self.records[idx]
    }

    /// Iterate over all records in arrival order
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.records.iter()
    }

    /// All records, in arrival order
    pub fn records(&self) -> &[Process] {
        &self.records
    }

    /// Sum of all burst times (total CPU demand of the workload)
    pub fn total_burst(&self) -> Tick {
        self.records.iter().map(|p| p.burst_time).sum()
    }
}
