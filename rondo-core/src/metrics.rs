//! Metric accrual and finalization
//!
//! The accumulator is plain state threaded through the scheduler, updated at
//! exactly two points: response capture at a process's first dispatch, and
//! waiting-time capture at its completion. Averages are derived once, after
//! the loop terminates.

use crate::error::{Error, Result};
use crate::process::Tick;
use serde::{Deserialize, Serialize};

/// Running totals updated by the scheduler loop
#[derive(Debug, Default, Clone)]
pub struct MetricsAccumulator {
    total_waiting: Tick,
    total_response: Tick,
}

impl MetricsAccumulator {
    /// Create a zeroed accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the arrival-to-first-dispatch delay of one process
    ///
    /// Fires exactly once per process, at its first dispatch, regardless of
    /// how many quanta it later needs.
    pub fn record_response(&mut self, delay: Tick) {
        self.total_response += delay;
    }

    /// Record the lifetime ready-queue waiting time of one completed process
    ///
    /// Equal to `completion - arrival - burst`, since a finished process
    /// split its whole life between waiting and running.
    pub fn record_completion(&mut self, waited: Tick) {
        self.total_waiting += waited;
    }

    /// Total accumulated waiting time
    pub fn total_waiting(&self) -> Tick {
        self.total_waiting
    }

    /// Total accumulated response time
    pub fn total_response(&self) -> Tick {
        self.total_response
    }

    /// Derive final averages over `count` processes
    ///
    /// `busy` is the total CPU demand of the workload and `makespan` the
    /// final clock value; both feed the utilization figure.
    ///
    /// # Returns
    /// Error if `count` is zero. Ingestion rejects empty process sets, so a
    /// zero count here means the caller skipped validation.
    pub fn finalize(self, count: usize, busy: Tick, makespan: Tick) -> Result<ScheduleMetrics> {
        if count == 0 {
            return Err(Error::Metrics(
                "cannot average metrics over zero processes".to_string(),
            ));
        }

        let n = count as f64;
        let cpu_utilization = if makespan > 0 {
            busy as f64 / makespan as f64
        } else {
            0.0
        };

        Ok(ScheduleMetrics {
            process_count: count,
            total_waiting_time: self.total_waiting,
            total_response_time: self.total_response,
            avg_waiting_time: self.total_waiting as f64 / n,
            avg_response_time: self.total_response as f64 / n,
            avg_turnaround_time: (self.total_waiting + busy) as f64 / n,
            makespan,
            cpu_utilization,
        })
    }
}

/// Finalized schedule metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    pub process_count: usize,
    pub total_waiting_time: Tick,
    pub total_response_time: Tick,
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
    pub avg_turnaround_time: f64,
    /// Final clock value: tick at which the last process completed
    pub makespan: Tick,
    /// Fraction of the makespan the CPU spent executing (1.0 = no idle gaps)
    pub cpu_utilization: f64,
}
