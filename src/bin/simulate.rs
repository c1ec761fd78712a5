//! Autopilot simulator CLI.
//!
//! Plays many headless games to see how a set of tunables behaves.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 runs, default tunables
//!   cargo run --bin simulate -- -n 500 --seed 42    # Reproducible batch
//!   cargo run --bin simulate -- -c hard.json        # Try a config file

use flappy::config::{parse_seed, GameConfig};
use flappy::logging;
use flappy::simulator::{run_simulation, SimConfig};
use std::env;
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    logging::init_for_cli();

    let args: Vec<String> = env::args().collect();
    let (mut config, config_path, write_json) = parse_args(&args);

    if let Some(path) = &config_path {
        config.game = GameConfig::load(path)?;
        log::info!("loaded tunables from {}", path.display());
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  FLAPPY AUTOPILOT SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    match &config_path {
        Some(path) => println!("  Tunables:       {}", path.display()),
        None => println!("  Tunables:       built-in defaults"),
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> (SimConfig, Option<PathBuf>, bool) {
    let mut config = SimConfig::default();
    let mut config_path = None;
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    match parse_seed(&args[i + 1]) {
                        Ok(seed) => config.seed = Some(seed),
                        Err(e) => {
                            eprintln!("{}", e);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                write_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'simulate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, config_path, write_json)
}

fn print_help() {
    println!("Flappy Autopilot Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of games (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per game (default: 18,000)");
    println!("    -c, --config <F>    Load tunables from a JSON file");
    println!("    -v, --verbose       Print every run");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
