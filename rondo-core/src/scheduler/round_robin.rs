//! Preemptive Round Robin simulation over a fixed process set
//!
//! The loop advances simulated time directly: execution slices add their
//! length to the clock, and idle gaps jump the clock straight to the next
//! arrival instead of ticking through them. Arrival admission is a single
//! explicit routine invoked everywhere the clock moves, so simultaneous
//! arrivals are always admitted in arrival order before the next dispatch.

use crate::config::SimConfig;
use crate::metrics::{MetricsAccumulator, ScheduleMetrics};
use crate::process::{Pid, ProcessSet, Tick};
use crate::queue::ReadyQueue;
use crate::Result;
use serde::{Deserialize, Serialize};

/// One dispatched execution slice: `pid` ran over `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Tick,
    pub end: Tick,
}

/// Per-process results, finalized at completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    /// Tick of the first dispatch
    pub first_dispatch: Tick,
    /// Tick at which the last slice finished
    pub completion_time: Tick,
    /// Lifetime time spent arrived-but-not-running
    pub waiting_time: Tick,
    /// Arrival to first dispatch
    pub response_time: Tick,
    /// Arrival to completion (= waiting + burst)
    pub turnaround_time: Tick,
}

/// Everything a completed simulation produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimOutcome {
    pub metrics: ScheduleMetrics,
    /// Every dispatched slice, in execution order
    pub trace: Vec<Slice>,
    /// Per-process results, in arrival order
    pub processes: Vec<ProcessOutcome>,
}

/// Preemptive Round Robin scheduler
///
/// Consumes an arrival-sorted [`ProcessSet`] and a validated [`SimConfig`];
/// [`run`](RoundRobinSim::run) drives the loop to completion and returns the
/// metrics, the slice trace, and per-process outcomes. The same input always
/// produces the same outcome.
pub struct RoundRobinSim {
    processes: ProcessSet,
    quantum: Tick,
    queue: ReadyQueue,
    clock: Tick,
    /// Index of the earliest not-yet-arrived record; monotonically advances
    /// over the arrival-sorted set
    next_arrival: usize,
    finished: usize,
    metrics: MetricsAccumulator,
    trace: Vec<Slice>,
    first_dispatch: Vec<Tick>,
    completion: Vec<Tick>,
}

impl RoundRobinSim {
    /// Set up a simulation; nothing runs until [`run`](RoundRobinSim::run)
    pub fn new(processes: ProcessSet, config: SimConfig) -> Self {
        let count = processes.len();
        Self {
            processes,
            quantum: config.quantum(),
            queue: ReadyQueue::new(),
            clock: 0,
            next_arrival: 0,
            finished: 0,
            metrics: MetricsAccumulator::new(),
            trace: Vec::new(),
            first_dispatch: vec![0; count],
            completion: vec![0; count],
        }
    }

    /// Admit every process whose arrival time is at or before the clock
    ///
    /// Invoked before the loop, inside the idle jump, and after every slice.
    /// Running it after a slice but before the preempted process is requeued
    /// is what puts boundary arrivals ahead of that process in the queue.
    fn admit_arrivals(&mut self) {
        while let Some(p) = self.processes.get(self.next_arrival) {
            if p.arrival_time > self.clock {
                break;
            }
            self.queue.enqueue(self.next_arrival);
            self.next_arrival += 1;
        }
    }

    /// Jump the clock over an idle gap to the next arrival and admit it
    ///
    /// Only called when the ready queue is empty and unfinished processes
    /// remain, so the admission cursor necessarily points at a real record.
    fn jump_to_next_arrival(&mut self) {
        debug_assert!(
            self.next_arrival < self.processes.len(),
            "idle with no pending arrivals"
        );
        if let Some(p) = self.processes.get(self.next_arrival) {
            self.clock = p.arrival_time;
            self.admit_arrivals();
        }
    }

    /// Run the loop to completion
    pub fn run(mut self) -> Result<SimOutcome> {
        let total = self.processes.len();

        self.admit_arrivals();

        while self.finished < total {
            let idx = match self.queue.dequeue() {
                Some(idx) => idx,
                None => {
                    // Idle: no process is ready, jump straight to the next
                    // arrival rather than ticking through the gap
                    self.jump_to_next_arrival();
                    continue;
                }
            };

            let dispatched_at = self.clock;
            let p = self.processes.record_mut(idx);

            if !p.started {
                p.started = true;
                self.first_dispatch[idx] = dispatched_at;
                self.metrics.record_response(dispatched_at - p.arrival_time);
            }

            // Execute up to one quantum
            let slice = p.remaining_time.min(self.quantum);
            p.remaining_time -= slice;
            let pid = p.pid;
            let arrival = p.arrival_time;
            let burst = p.burst_time;
            let done = p.remaining_time == 0;

            self.clock += slice;
            self.trace.push(Slice { pid, start: dispatched_at, end: self.clock });

            // Admit arrivals up to the new clock before requeuing, so a
            // process arriving exactly at the preemption boundary is
            // serviced ahead of the process that just yielded
            self.admit_arrivals();

            if done {
                self.finished += 1;
                self.completion[idx] = self.clock;
                self.metrics.record_completion(self.clock - arrival - burst);
            } else {
                self.queue.enqueue(idx);
            }
        }

        self.into_outcome()
    }

    fn into_outcome(self) -> Result<SimOutcome> {
        let busy = self.processes.total_burst();
        let makespan = self.clock;

        let processes = self
            .processes
            .iter()
            .zip(self.first_dispatch.iter().zip(self.completion.iter()))
            .map(|(p, (&first, &completion))| ProcessOutcome {
                pid: p.pid,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                first_dispatch: first,
                completion_time: completion,
                waiting_time: completion - p.arrival_time - p.burst_time,
                response_time: first - p.arrival_time,
                turnaround_time: completion - p.arrival_time,
            })
            .collect();

        let metrics = self.metrics.finalize(self.processes.len(), busy, makespan)?;

        Ok(SimOutcome { metrics, trace: self.trace, processes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;

    fn simulate(records: Vec<Process>, quantum: Tick) -> SimOutcome {
        let set = ProcessSet::new(records).expect("valid process set");
        let config = SimConfig::new(quantum).expect("valid quantum");
        RoundRobinSim::new(set, config).run().expect("simulation completes")
    }

    #[test]
    fn test_single_process_one_slice() {
        // Burst shorter than the quantum: runs to completion in one slice
        let outcome = simulate(vec![Process::new(1, 0, 5)], 10);

        assert_eq!(outcome.trace, vec![Slice { pid: 1, start: 0, end: 5 }]);
        assert_eq!(outcome.metrics.avg_waiting_time, 0.0);
        assert_eq!(outcome.metrics.avg_response_time, 0.0);
        assert_eq!(outcome.metrics.makespan, 5);
        assert_eq!(outcome.metrics.cpu_utilization, 1.0);
    }

    #[test]
    fn test_two_process_interleave() {
        // P1(arrival=0, burst=4), P2(arrival=1, burst=3), quantum=2:
        // P1 [0,2), P2 [2,4), P1 [4,6) finishing, P2 [6,7) finishing
        let outcome = simulate(vec![Process::new(1, 0, 4), Process::new(2, 1, 3)], 2);

        assert_eq!(
            outcome.trace,
            vec![
                Slice { pid: 1, start: 0, end: 2 },
                Slice { pid: 2, start: 2, end: 4 },
                Slice { pid: 1, start: 4, end: 6 },
                Slice { pid: 2, start: 6, end: 7 },
            ]
        );

        // P1: completes at 6, waited 6-0-4 = 2; responded at 0
        // P2: completes at 7, waited 7-1-3 = 3; responded at 2-1 = 1
        assert_eq!(outcome.metrics.total_waiting_time, 5);
        assert_eq!(outcome.metrics.total_response_time, 1);
        assert_eq!(outcome.metrics.avg_waiting_time, 2.5);
        assert_eq!(outcome.metrics.avg_response_time, 0.5);
    }

    #[test]
    fn test_idle_gap_jumps_clock() {
        // Queue drains at t=2; next arrival at t=5. The clock must jump
        // directly to 5 with no phantom waiting accrued to either process.
        let outcome = simulate(vec![Process::new(1, 0, 2), Process::new(2, 5, 2)], 2);

        assert_eq!(
            outcome.trace,
            vec![
                Slice { pid: 1, start: 0, end: 2 },
                Slice { pid: 2, start: 5, end: 7 },
            ]
        );
        assert_eq!(outcome.metrics.total_waiting_time, 0);
        assert_eq!(outcome.metrics.total_response_time, 0);
        assert_eq!(outcome.metrics.makespan, 7);
        // 4 busy ticks over a makespan of 7
        assert!((outcome.metrics.cpu_utilization - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_arrival_precedes_requeue() {
        // P2 arrives exactly when P1's first quantum expires; it must be
        // queued ahead of the preempted P1.
        let outcome = simulate(vec![Process::new(1, 0, 4), Process::new(2, 2, 2)], 2);

        assert_eq!(
            outcome.trace,
            vec![
                Slice { pid: 1, start: 0, end: 2 },
                Slice { pid: 2, start: 2, end: 4 },
                Slice { pid: 1, start: 4, end: 6 },
            ]
        );
    }

    #[test]
    fn test_simultaneous_arrivals_in_input_order() {
        let outcome = simulate(
            vec![Process::new(1, 0, 1), Process::new(2, 0, 1), Process::new(3, 0, 1)],
            5,
        );
        let order: Vec<Pid> = outcome.trace.iter().map(|s| s.pid).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_response_fixed_at_first_dispatch() {
        // P1 needs three quanta; its response time must come from the first
        // dispatch only.
        let outcome = simulate(vec![Process::new(1, 0, 6), Process::new(2, 1, 2)], 2);

        let p1 = &outcome.processes[0];
        assert_eq!(p1.first_dispatch, 0);
        assert_eq!(p1.response_time, 0);
        // P1 slices: [0,2), [4,6), [6,8)
        let p1_slices: Vec<&Slice> = outcome.trace.iter().filter(|s| s.pid == 1).collect();
        assert_eq!(p1_slices.len(), 3);
    }

    #[test]
    fn test_all_processes_finish() {
        let outcome = simulate(
            vec![
                Process::new(1, 0, 7),
                Process::new(2, 2, 4),
                Process::new(3, 4, 1),
                Process::new(4, 9, 3),
            ],
            3,
        );
        assert_eq!(outcome.processes.len(), 4);
        for p in &outcome.processes {
            // waiting = completion - arrival - burst is non-negative by
            // construction of the subtraction; check the identity instead
            assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
            assert_eq!(p.completion_time, p.arrival_time + p.turnaround_time);
            assert!(p.first_dispatch >= p.arrival_time);
        }
        // Makespan equals the end of the last slice
        assert_eq!(outcome.metrics.makespan, outcome.trace.last().unwrap().end);
    }

    #[test]
    fn test_trace_slices_bounded_by_quantum() {
        let outcome = simulate(
            vec![Process::new(1, 0, 10), Process::new(2, 3, 5), Process::new(3, 3, 2)],
            4,
        );
        for slice in &outcome.trace {
            assert!(slice.end - slice.start <= 4);
            assert!(slice.end > slice.start);
        }
    }

    #[test]
    fn test_deterministic_rerun() {
        let records = || {
            vec![
                Process::new(1, 0, 9),
                Process::new(2, 1, 4),
                Process::new(3, 1, 6),
                Process::new(4, 12, 2),
            ]
        };
        let first = simulate(records(), 3);
        let second = simulate(records(), 3);

        assert_eq!(first.trace, second.trace);
        assert_eq!(first.metrics.avg_waiting_time, second.metrics.avg_waiting_time);
        assert_eq!(first.metrics.avg_response_time, second.metrics.avg_response_time);
    }

    #[test]
    fn test_late_first_arrival() {
        // Nobody at t=0: the clock jumps forward before the first dispatch,
        // and the first process still sees zero waiting time.
        let outcome = simulate(vec![Process::new(1, 100, 3)], 2);
        assert_eq!(
            outcome.trace,
            vec![
                Slice { pid: 1, start: 100, end: 102 },
                Slice { pid: 1, start: 102, end: 103 },
            ]
        );
        assert_eq!(outcome.processes[0].waiting_time, 0);
        assert_eq!(outcome.processes[0].response_time, 0);
    }
}
