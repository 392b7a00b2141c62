//! Workload ingestion and synthesis
//!
//! A workload is a text file: a process count followed by one
//! `pid arrival_time burst_time` triple per process, with integers
//! separated by arbitrary non-digit bytes. [`import`] reads and validates
//! that format; [`synthetic`] generates reproducible random workloads that
//! render to the same format.

pub mod import;
pub mod synthetic;

// Re-export main types
pub use import::{load_processes, parse_processes, render_workload};
pub use synthetic::SyntheticWorkload;
