//! MIPS pipeline simulator CLI.
//!
//! This binary is the front end for the simulator library. It performs:
//! 1. **Program run:** Load a raw or hex program image and tick the pipeline
//!    until it drains, a fault surfaces, or the watchdog fires.
//! 2. **Reporting:** Pipeline trace and diagram (opt-in), final register
//!    dump, and the statistics report.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand, ValueEnum};

use mips_core::config::Config;
use mips_core::sim::{loader, RunError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS cycle-accurate pipeline simulator",
    long_about = "Run a MIPS-I program image through the five-stage pipeline.\n\nImages are raw big-endian words or hex listings (one word per line, # comments).\n\nExamples:\n  sim run program.bin\n  sim run program.hex --trace\n  sim run program.bin --config sim.json --dump-regs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Program image formats the loader understands.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImageFormat {
    /// Choose by file extension (.hex/.txt are listings, the rest raw).
    Auto,
    /// Raw big-endian 32-bit words.
    Bin,
    /// Hex listing, one word per line.
    Hex,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until the pipeline drains.
    Run {
        /// Program image to execute.
        file: PathBuf,

        /// Image format.
        #[arg(long, value_enum, default_value_t = ImageFormat::Auto)]
        format: ImageFormat,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit per-stage trace lines and the pipeline diagram to stderr.
        #[arg(short, long)]
        trace: bool,

        /// Override the watchdog cycle budget.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Override the memory image size in bytes.
        #[arg(long)]
        memory: Option<usize>,

        /// Load address (defaults to the configured start pc).
        #[arg(long)]
        base: Option<u32>,

        /// Dump all registers after the run.
        #[arg(long)]
        dump_regs: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            format,
            config,
            trace,
            max_cycles,
            memory,
            base,
            dump_regs,
        }) => cmd_run(&file, format, config, trace, max_cycles, memory, base, dump_regs),
        None => {
            eprintln!("MIPS Pipeline Simulator — pass a subcommand");
            eprintln!();
            eprintln!("  sim run <image>            Run a program image");
            eprintln!("  sim run <image> --trace    Run with a pipeline trace");
            eprintln!();
            eprintln!("  sim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the simulator: builds the config, loads the image, then drives the
/// pipeline to completion. On a fatal trap, dumps state and exits with
/// code 1.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn cmd_run(
    file: &PathBuf,
    format: ImageFormat,
    config_path: Option<PathBuf>,
    trace: bool,
    max_cycles: Option<u64>,
    memory: Option<usize>,
    base: Option<u32>,
    dump_regs: bool,
) {
    let mut config = config_path.map_or_else(Config::default, |path| {
        let text = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading config {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("Error parsing config {}: {e}", path.display());
            process::exit(1);
        })
    });
    if trace {
        config.general.trace = true;
    }
    if let Some(limit) = max_cycles {
        config.general.max_cycles = limit;
    }
    if let Some(size) = memory {
        config.memory.size = size;
    }

    println!(
        "Configuration: trace={}  start pc={:#x}  memory={} KiB  watchdog={} cycles",
        config.general.trace,
        config.general.start_pc,
        config.memory.size / 1024,
        config.general.max_cycles
    );
    println!();

    let words = match format {
        ImageFormat::Auto => loader::load_image(file),
        ImageFormat::Bin => loader::load_raw(file),
        ImageFormat::Hex => loader::load_hex(file),
    }
    .unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let load_base = base.unwrap_or(config.general.start_pc);
    println!("[*] Direct execution: {}", file.display());

    let mut sim = Simulator::new(&config);
    if let Err(fault) = sim.load_program(&words, load_base) {
        eprintln!("[!] FATAL: {fault}");
        process::exit(1);
    }

    match sim.run_to_halt() {
        Ok(cycles) => {
            println!("\n[*] Pipeline drained after {cycles} cycles");
            if dump_regs {
                println!();
                sim.cpu.dump_state();
            }
            sim.cpu.stats.print();
        }
        Err(RunError::Trap(trap)) => {
            eprintln!("\n[!] FATAL TRAP: {trap}");
            sim.cpu.dump_state();
            sim.cpu.stats.print();
            process::exit(1);
        }
        Err(RunError::CycleLimit { limit }) => {
            eprintln!("\n[!] WATCHDOG: no halt after {limit} cycles");
            sim.cpu.dump_state();
            sim.cpu.stats.print();
            process::exit(1);
        }
    }
}
