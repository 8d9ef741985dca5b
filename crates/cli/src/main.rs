//! Garden forage simulator CLI.
//!
//! This binary provides a single entry point for foraging carrot gardens. It performs:
//! 1. **Run:** Forage a garden described by a JSON matrix, from a file or inline.
//! 2. **Demo:** Forage the built-in challenge garden and check the known total.
//!
//! Both modes can narrate every turn to stderr with `--trace` and finish with
//! a statistics report on stdout.

use clap::{Parser, Subcommand};
use std::{fs, process};

use hopsim_core::sim::loader;
use hopsim_core::{Config, Garden, Simulator};

/// The 4x5 challenge garden from the original puzzle statement.
const DEMO_GARDEN: [[u32; 5]; 4] = [
    [5, 7, 8, 6, 3],
    [0, 0, 7, 0, 4],
    [4, 6, 3, 4, 9],
    [3, 1, 0, 5, 8],
];

/// Carrots the rabbit is known to eat in the demo garden.
const DEMO_EXPECTED: u64 = 27;

#[derive(Parser, Debug)]
#[command(
    name = "hopsim",
    version,
    about = "Deterministic garden forage simulator",
    long_about = "Place a rabbit at the center of a carrot garden and watch it eat greedily.\n\nGardens are JSON matrices of non-negative integers. Movement ties resolve down, up, right, left; the run is bit-for-bit reproducible.\n\nExamples:\n  hopsim run -f gardens/challenge.json\n  hopsim run --garden '[[5,7],[8,6]]' --trace\n  hopsim demo"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Forage a garden described by a JSON matrix.
    Run {
        /// Garden file (JSON matrix of carrot counts).
        #[arg(short, long)]
        file: Option<String>,

        /// Inline garden JSON, e.g. '[[5,7],[8,6]]'.
        #[arg(long)]
        garden: Option<String>,

        /// Simulator config file (JSON).
        #[arg(long)]
        config: Option<String>,

        /// Narrate each turn to stderr.
        #[arg(short, long)]
        trace: bool,
    },

    /// Forage the built-in challenge garden.
    Demo {
        /// Narrate each turn to stderr.
        #[arg(short, long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            garden,
            config,
            trace,
        }) => cmd_run(file, garden, config, trace),
        Some(Commands::Demo { trace }) => cmd_demo(trace),
        None => {
            eprintln!("Garden forage simulator: pass a subcommand");
            eprintln!();
            eprintln!("  hopsim run -f <garden.json>       Forage a garden file");
            eprintln!("  hopsim run --garden '[[5,7],[8,6]]'");
            eprintln!("  hopsim demo                       Forage the built-in garden");
            eprintln!();
            eprintln!("  hopsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Forages a garden from a file or inline JSON, printing results and statistics.
fn cmd_run(
    file: Option<String>,
    garden_json: Option<String>,
    config_path: Option<String>,
    trace: bool,
) {
    let mut config = match config_path.as_deref() {
        Some(path) => load_config(path),
        None => Config::default(),
    };
    if trace {
        config.trace_steps = true;
    }
    println!(
        "Configuration: {}  trace={}",
        config_path.as_deref().unwrap_or("default"),
        config.trace_steps
    );

    let garden = if let Some(path) = file {
        loader::from_file(&path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        })
    } else if let Some(text) = garden_json {
        loader::from_json(&text).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        })
    } else {
        eprintln!("Error: specify --file <garden.json> or --garden <json>");
        eprintln!("  hopsim run -f gardens/challenge.json");
        eprintln!("  hopsim run --garden '[[5,7],[8,6]]'");
        process::exit(1);
    };

    forage(garden, &config);
}

/// Forages the built-in challenge garden and verifies the known total.
fn cmd_demo(trace: bool) {
    let config = Config { trace_steps: trace };
    let matrix = DEMO_GARDEN.iter().map(|row| row.to_vec()).collect();
    let garden = Garden::new(matrix).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let total = forage(garden, &config);
    if total != DEMO_EXPECTED {
        eprintln!("[!] UNEXPECTED: ate {total} carrots, expected {DEMO_EXPECTED}");
        process::exit(1);
    }
}

/// Runs one forage to completion; prints the result line and statistics,
/// and returns the carrots eaten.
fn forage(garden: Garden, config: &Config) -> u64 {
    println!(
        "[*] Garden: {}x{}, {} carrots",
        garden.rows(),
        garden.cols(),
        garden.remaining_carrots()
    );

    let mut sim = Simulator::new(garden, config);
    let total = sim.run();

    println!(
        "\n[*] The rabbit ate {total} carrots hopping along {}",
        sim.path_string()
    );
    sim.stats().print();
    total
}

/// Reads a JSON config file, exiting with an error message on failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{path}': {e}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse config '{path}': {e}");
        process::exit(1);
    })
}
