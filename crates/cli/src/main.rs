//! RV32 dual-engine simulator CLI.
//!
//! This binary wires up the library for one run:
//! 1. **Setup:** Parse arguments, load the optional JSON config, install the
//!    tracing subscriber.
//! 2. **Run:** Build both engines from the I/O directory and step them in
//!    lockstep until both stop.
//! 3. **Report:** Write the trace artifacts under `results/<testcase>/` and
//!    print a per-engine summary.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv32sim_core::core::Engine;
use rv32sim_core::{Config, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "Cycle-accurate RV32 simulator (single-cycle and five-stage pipelined engines)",
    long_about = "Runs one program on a single-cycle engine and a five-stage pipelined engine \
in lockstep, then writes per-cycle register/state dumps, final data-memory dumps, and a \
performance comparison under results/<testcase>/.\n\nThe I/O directory must contain imem.txt \
and dmem.txt, one 8-digit binary byte per line."
)]
struct Cli {
    /// Directory containing imem.txt and dmem.txt.
    #[arg(long)]
    iodir: String,

    /// Optional JSON config overriding memory size / cycle limit defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::from_file) {
        Some(Ok(cfg)) => cfg,
        Some(Err(e)) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
        None => Config::default(),
    };

    let default_level = if config.general.trace_instructions {
        "trace"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let iodir = match std::path::absolute(&cli.iodir) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[!] FATAL: cannot resolve I/O directory {}: {e}", cli.iodir);
            process::exit(1);
        }
    };
    let testcase = iodir.file_name().map_or_else(
        || "testcase".to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    let out_dir = Path::new("results").join(testcase);

    println!("IO Directory: {}", iodir.display());

    let mut sim = match Simulator::new(&iodir, out_dir, &config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    match sim.run() {
        Ok(()) => {}
        Err(SimError::SafetyLimitReached { limit }) => {
            eprintln!("[!] WARNING: safety limit reached after {limit} cycles");
        }
        Err(e) => {
            error!("simulation aborted: {e}");
            // Dump whatever the engines produced before the fault.
            if let Err(io) = sim.write_outputs() {
                eprintln!("[!] {io}");
            }
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = sim.write_outputs() {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    sim.single_cycle.stats().print("single-cycle engine");
    sim.five_stage.stats().print("five-stage engine");
}
