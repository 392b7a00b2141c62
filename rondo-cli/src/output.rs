//! Results output formatting

use anyhow::Result;
use rondo_core::{SimOutcome, Tick};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Simulation results report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResults {
    pub name: String,
    pub quantum: Tick,
    pub process_count: usize,
    pub makespan: Tick,
    pub cpu_utilization: f64,
    /// Dispatches that ended in preemption rather than completion
    pub preemptions: usize,
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
    pub avg_turnaround_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<Vec<ProcessRow>>,
}

/// One row of the optional per-process table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRow {
    pub pid: u32,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub completion_time: Tick,
    pub waiting_time: Tick,
    pub response_time: Tick,
    pub turnaround_time: Tick,
}

impl SimulationResults {
    /// Create a report from a finished simulation
    pub fn from_outcome(
        name: impl Into<String>,
        quantum: Tick,
        outcome: &SimOutcome,
        per_process: bool,
    ) -> Self {
        let metrics = &outcome.metrics;
        // Every process's final slice completes it; the rest were preemptions
        let preemptions = outcome.trace.len() - outcome.processes.len();

        let processes = per_process.then(|| {
            outcome
                .processes
                .iter()
                .map(|p| ProcessRow {
                    pid: p.pid,
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    completion_time: p.completion_time,
                    waiting_time: p.waiting_time,
                    response_time: p.response_time,
                    turnaround_time: p.turnaround_time,
                })
                .collect()
        });

        Self {
            name: name.into(),
            quantum,
            process_count: metrics.process_count,
            makespan: metrics.makespan,
            cpu_utilization: metrics.cpu_utilization,
            preemptions,
            avg_waiting_time: metrics.avg_waiting_time,
            avg_response_time: metrics.avg_response_time,
            avg_turnaround_time: metrics.avg_turnaround_time,
            processes,
        }
    }

    /// Print results to stdout in human-readable format
    pub fn print_human(&self) {
        println!("\n{}", "=".repeat(60));
        println!("Rondo Round Robin Simulation Results");
        println!("{}", "=".repeat(60));
        println!();
        println!("Configuration:");
        println!("  Name:            {}", self.name);
        println!("  Quantum:         {} ticks", self.quantum);
        println!("  Processes:       {}", self.process_count);
        println!();
        println!("Schedule:");
        println!("  Makespan:        {} ticks", self.makespan);
        println!("  Preemptions:     {}", self.preemptions);
        println!("  CPU utilization: {:.1}%", self.cpu_utilization * 100.0);
        println!();
        println!("Metrics (ticks):");
        println!("  Average waiting time:    {:.2}", self.avg_waiting_time);
        println!("  Average response time:   {:.2}", self.avg_response_time);
        println!("  Average turnaround time: {:.2}", self.avg_turnaround_time);

        if let Some(rows) = &self.processes {
            println!();
            println!("Per-process:");
            println!("  {:>6} {:>8} {:>6} {:>10} {:>8} {:>9} {:>11}",
                "pid", "arrival", "burst", "completion", "waiting", "response", "turnaround");
            for row in rows {
                println!(
                    "  {:>6} {:>8} {:>6} {:>10} {:>8} {:>9} {:>11}",
                    row.pid,
                    row.arrival_time,
                    row.burst_time,
                    row.completion_time,
                    row.waiting_time,
                    row.response_time,
                    row.turnaround_time
                );
            }
        }
        println!();
        println!("{}", "=".repeat(60));
    }

    /// Write results to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        println!("Results written to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rondo_core::{Process, ProcessSet, RoundRobinSim, SimConfig};

    fn sample_outcome() -> SimOutcome {
        let set = ProcessSet::new(vec![Process::new(1, 0, 4), Process::new(2, 1, 3)]).unwrap();
        RoundRobinSim::new(set, SimConfig::new(2).unwrap()).run().unwrap()
    }

    #[test]
    fn test_results_from_outcome() {
        let outcome = sample_outcome();
        let results = SimulationResults::from_outcome("demo", 2, &outcome, false);

        assert_eq!(results.name, "demo");
        assert_eq!(results.quantum, 2);
        assert_eq!(results.process_count, 2);
        assert_eq!(results.makespan, 7);
        // 4 slices for 2 processes: 2 preemptions
        assert_eq!(results.preemptions, 2);
        assert_eq!(results.avg_waiting_time, 2.5);
        assert_eq!(results.avg_response_time, 0.5);
        assert!(results.processes.is_none());
    }

    #[test]
    fn test_per_process_rows() {
        let outcome = sample_outcome();
        let results = SimulationResults::from_outcome("demo", 2, &outcome, true);

        let rows = results.processes.expect("per-process rows requested");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pid, 1);
        assert_eq!(rows[0].completion_time, 6);
        assert_eq!(rows[1].pid, 2);
        assert_eq!(rows[1].completion_time, 7);
    }

    #[test]
    fn test_json_serialization() {
        let outcome = sample_outcome();
        let results = SimulationResults::from_outcome("demo", 2, &outcome, false);

        let json = serde_json::to_string(&results).expect("serializes");
        assert!(json.contains("\"avg_waiting_time\":2.5"));
        // per-process table omitted entirely when not requested
        assert!(!json.contains("\"processes\""));
    }
}
