//! Workload file ingestion
//!
//! The format is a sequence of unsigned decimal integers separated by any
//! non-digit bytes: first the process count, then `pid arrival burst`
//! triples. Anything that is not a digit is a separator, so newlines,
//! commas, and column alignment all parse the same way.

use crate::process::{Pid, Process, ProcessSet, Tick};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Scanner over raw workload bytes, yielding unsigned integers
struct IntScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IntScanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Scan the next integer, skipping leading non-digit bytes
    ///
    /// # Returns
    /// Error if the input ends before a complete integer is found, or the
    /// value overflows a u64.
    fn next_int(&mut self) -> Result<u64> {
        let mut current: u64 = 0;
        let mut started = false;

        while self.pos < self.data.len() {
            let c = self.data[self.pos];
            if c.is_ascii_digit() {
                current = current
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(c - b'0')))
                    .context("integer overflows 64 bits")?;
                started = true;
            } else if started {
                return Ok(current);
            }
            self.pos += 1;
        }

        if started {
            return Ok(current);
        }
        bail!("reached end of input while scanning for an integer")
    }
}

/// Parse a workload from raw bytes into a validated process set
///
/// The declared count governs how many triples are read; trailing bytes
/// after the last triple are ignored.
pub fn parse_processes(data: &[u8]) -> Result<ProcessSet> {
    let mut scanner = IntScanner::new(data);

    let count = scanner.next_int().context("failed to read process count")?;
    if count == 0 {
        bail!("workload declares zero processes");
    }

    let mut records = Vec::with_capacity(count as usize);
    for i in 0..count {
        let read = |scanner: &mut IntScanner<'_>, field: &str| {
            scanner
                .next_int()
                .with_context(|| format!("failed to read {field} of process record {}", i + 1))
        };
        let pid = read(&mut scanner, "pid")?;
        let arrival: Tick = read(&mut scanner, "arrival time")?;
        let burst: Tick = read(&mut scanner, "burst time")?;

        let pid: Pid = pid
            .try_into()
            .with_context(|| format!("pid {pid} does not fit in 32 bits"))?;
        records.push(Process::new(pid, arrival, burst));
    }

    Ok(ProcessSet::new(records)?)
}

/// Load and parse a workload file
pub fn load_processes<P: AsRef<Path>>(path: P) -> Result<ProcessSet> {
    let path = path.as_ref();
    let data = fs::read(path)
        .with_context(|| format!("failed to read workload file: {}", path.display()))?;

    let set = parse_processes(&data)
        .with_context(|| format!("malformed workload file: {}", path.display()))?;

    tracing::info!("loaded {} processes from {}", set.len(), path.display());
    Ok(set)
}

/// Render a process set in the same text format the importer reads
pub fn render_workload(set: &ProcessSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", set.len()));
    for p in set.iter() {
        out.push_str(&format!("{} {} {}\n", p.pid, p.arrival_time, p.burst_time));
    }
    out
}
