use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use schemars::schema_for;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rondo_core::workload::{load_processes, render_workload, SyntheticWorkload};
use rondo_core::{RoundRobinSim, SimConfig, Tick};

mod config;
mod output;

use config::ProfileConfig;
use output::SimulationResults;

/// Rondo: Round Robin CPU scheduling simulator
///
/// Rondo runs a preemptive round-robin schedule over a fixed process set
/// and reports waiting/response/turnaround metrics. Workloads come from a
/// text file, a seeded synthetic generator, or a TOML profile.
///
/// Example usage:
///   rondo run --workload workloads/textbook.txt --quantum 2
///   rondo run -P profiles/synthetic-smoke.toml
///   rondo run -P profiles/textbook-mix.toml --quantum 4 --per-process
///   rondo generate --count 50 --seed 42 --output workloads/random.txt
///   rondo completions bash > ~/.local/share/bash-completion/completions/rondo
#[derive(Parser)]
#[command(name = "rondo")]
#[command(version, about = "Round Robin scheduling simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation (default command)
    Run {
        /// Path to a TOML profile configuration file
        #[arg(short = 'P', long, conflicts_with = "workload")]
        profile: Option<PathBuf>,

        /// Path to a workload file (count, then `pid arrival burst` triples)
        #[arg(short, long)]
        workload: Option<PathBuf>,

        /// Quantum length in ticks (overrides the profile's value)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        quantum: Option<Tick>,

        /// Write a JSON report to this path (overrides the profile's value)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the per-process table in the report
        #[arg(long)]
        per_process: bool,
    },

    /// Generate a synthetic workload file
    Generate {
        /// Number of processes
        #[arg(short, long)]
        count: usize,

        /// Master seed for reproducible generation
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Maximum gap between consecutive arrivals
        #[arg(long, default_value_t = 4)]
        max_gap: Tick,

        /// Minimum burst time (inclusive)
        #[arg(long, default_value_t = 1)]
        burst_min: Tick,

        /// Maximum burst time (inclusive)
        #[arg(long, default_value_t = 16)]
        burst_max: Tick,

        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for profile configuration files
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "rondo".to_string(), &mut io::stdout());
            Ok(())
        }
        Commands::Schema => {
            let schema = schema_for!(ProfileConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Commands::Run { profile, workload, quantum, output, per_process } => {
            run_simulation(profile, workload, quantum, output, per_process)
        }
        Commands::Generate { count, seed, max_gap, burst_min, burst_max, output } => {
            generate_workload(count, seed, max_gap, burst_min, burst_max, output)
        }
    }
}

fn run_simulation(
    profile: Option<PathBuf>,
    workload: Option<PathBuf>,
    quantum: Option<Tick>,
    output: Option<PathBuf>,
    per_process: bool,
) -> anyhow::Result<()> {
    let (name, set, quantum, output, per_process) = match profile {
        Some(path) => {
            tracing::info!("loading profile: {}", path.display());
            let config = ProfileConfig::from_file(&path)?;
            config.validate()?;

            if let Some(desc) = &config.simulation.description {
                tracing::info!("{}: {}", config.simulation.name, desc);
            }

            let set = config.resolve_workload()?;
            (
                config.simulation.name,
                set,
                quantum.unwrap_or(config.simulation.quantum),
                output.or(config.output.file),
                per_process || config.output.per_process,
            )
        }
        None => {
            let path = workload
                .ok_or_else(|| anyhow::anyhow!("either --profile or --workload is required"))?;
            let quantum =
                quantum.ok_or_else(|| anyhow::anyhow!("--quantum is required without a profile"))?;

            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "workload".to_string());
            let set = load_processes(&path)?;
            (name, set, quantum, output, per_process)
        }
    };

    tracing::info!("simulating {} processes with quantum {}", set.len(), quantum);

    let config = SimConfig::new(quantum)?;
    let outcome = RoundRobinSim::new(set, config).run()?;

    let results = SimulationResults::from_outcome(name, quantum, &outcome, per_process);
    results.print_human();

    if let Some(path) = output {
        results.write_json(&path)?;
    }

    Ok(())
}

fn generate_workload(
    count: usize,
    seed: u64,
    max_gap: Tick,
    burst_min: Tick,
    burst_max: Tick,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let set = SyntheticWorkload::new(count, seed)
        .with_max_arrival_gap(max_gap)
        .with_burst_range(burst_min, burst_max)
        .generate()?;

    let text = render_workload(&set);
    match output {
        Some(path) => {
            std::fs::write(&path, &text)?;
            tracing::info!("wrote {} processes to {}", set.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
