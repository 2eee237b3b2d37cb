//! Encounter balance simulator CLI.
//!
//! Run Monte Carlo simulations of the combat engine.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 encounters
//!   cargo run --bin simulate -- -n 100 -e 5    # 100 encounters against 5 enemies
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use anyhow::{Context, Result};
use skirmish::core::CombatConfig;
use skirmish::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args)?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH ENCOUNTER SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Enemies:        {}", config.enemies_per_encounter);
    println!("  Enemy Health:   {}", config.enemy_health);
    if let Some(damage) = config.enemy_damage {
        println!("  Enemy Damage:   {}", damage);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    tracing::info!(
        runs = report.num_runs,
        victories = report.victories,
        "simulation finished"
    );

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}

fn next_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} expects a value", flag))
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool)> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                let value = next_value(args, i, "--runs")?;
                config.num_runs = value
                    .parse()
                    .with_context(|| format!("invalid run count: {}", value))?;
                i += 1;
            }
            "-s" | "--seed" => {
                let value = next_value(args, i, "--seed")?;
                let seed: u64 = value
                    .parse()
                    .with_context(|| format!("invalid seed: {}", value))?;
                config.seed = Some(seed);
                i += 1;
            }
            "-e" | "--enemies" => {
                let value = next_value(args, i, "--enemies")?;
                config.enemies_per_encounter = value
                    .parse()
                    .with_context(|| format!("invalid enemy count: {}", value))?;
                i += 1;
            }
            "--enemy-health" => {
                let value = next_value(args, i, "--enemy-health")?;
                config.enemy_health = value
                    .parse()
                    .with_context(|| format!("invalid enemy health: {}", value))?;
                i += 1;
            }
            "--enemy-damage" => {
                let value = next_value(args, i, "--enemy-damage")?;
                let damage: u32 = value
                    .parse()
                    .with_context(|| format!("invalid enemy damage: {}", value))?;
                config.enemy_damage = Some(damage);
                i += 1;
            }
            "--config" => {
                let path = next_value(args, i, "--config")?;
                config.combat = CombatConfig::from_json_file(path)
                    .with_context(|| format!("failed to load combat config from {}", path))?;
                i += 1;
            }
            "--json" => {
                write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                tracing::warn!(arg = other, "ignoring unknown argument");
            }
        }
        i += 1;
    }

    Ok((config, write_json))
}

fn print_help() {
    println!("Skirmish Encounter Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of encounters (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -e, --enemies <E>       Enemies per encounter (default: 3)");
    println!("    --enemy-health <H>      Max health of each enemy (default: 25)");
    println!("    --enemy-damage <D>      Fixed enemy damage (default: rolled 1-3)");
    println!("    --config <FILE>         Load combat tuning from a JSON file");
    println!("    --json                  Save JSON report");
    println!("    -v, --verbose           Print every run");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 100 -e 5      # 100 runs vs 5 enemies");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    RUST_LOG=skirmish=debug cargo run --bin simulate -- -n 1");
}
