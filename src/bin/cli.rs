//! crawlrace CLI - runs the baby crawl-race timing demonstration
//!
//! Usage:
//!   crawlrace sequential [--repetitions <n>] [--quiet]
//!   crawlrace parallel   [--repetitions <n>] [--quiet]
//!
//! The default scenario is the fixed Ana/Luis/Mia setup on a 7-cell track;
//! it can be replaced with a JSON scenario file or inline racer/track specs.

use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crawlrace::{
    render_replay, run_repetitions, ConsoleObserver, HarnessReport, NoopObserver, Racer, Scenario,
    Track, REPETITIONS,
};

#[derive(Parser)]
#[command(name = "crawlrace")]
#[command(about = "Baby crawl-race timing demonstration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of repetitions to run
    #[arg(short, long, global = true, default_value_t = REPETITIONS)]
    repetitions: usize,

    /// Scenario JSON file ({"racers": [...], "track": {"cells": [...]}})
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,

    /// Inline racer spec NAME:SPEED:DELAY (repeatable, overrides defaults)
    #[arg(long = "racer", global = true)]
    racers: Vec<String>,

    /// Inline track pattern, e.g. 0001001 (0=empty, 1=toy)
    #[arg(short, long, global = true)]
    track: Option<String>,

    /// Suppress per-repetition output and the full timing replay
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every repetition strictly one after another
    Sequential,

    /// Run with nested parallelism: repetitions, racers and track cells
    #[cfg(feature = "parallel")]
    Parallel,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> crawlrace::Result<()> {
    let scenario = build_scenario(cli)?;
    info!(
        "racing {} racers over {} cells, {} repetitions",
        scenario.racers.len(),
        scenario.track.len(),
        cli.repetitions
    );

    let report = match cli.command {
        Commands::Sequential => {
            println!("Starting the sequential baby race");
            if cli.quiet {
                run_repetitions(&scenario, cli.repetitions, &NoopObserver)
            } else {
                let observer = ConsoleObserver::with_track_dump(scenario.clone());
                run_repetitions(&scenario, cli.repetitions, &observer)
            }
        }
        #[cfg(feature = "parallel")]
        Commands::Parallel => {
            println!("Starting the baby race with nested parallelism");
            if cli.quiet {
                crawlrace::run_repetitions_parallel(&scenario, cli.repetitions, &NoopObserver)
            } else {
                let observer = ConsoleObserver::new(scenario.clone());
                crawlrace::run_repetitions_parallel(&scenario, cli.repetitions, &observer)
            }
        }
    };

    print_summary(&report, cli.quiet)?;
    Ok(())
}

/// Assemble the scenario from file, inline specs, or the built-in default.
fn build_scenario(cli: &Cli) -> crawlrace::Result<Scenario> {
    if let Some(path) = &cli.scenario {
        return Scenario::from_json_file(path);
    }

    let defaults = Scenario::default();

    let racers = if cli.racers.is_empty() {
        defaults.racers
    } else {
        cli.racers
            .iter()
            .map(|spec| Racer::parse(spec))
            .collect::<crawlrace::Result<Vec<Racer>>>()?
    };

    let track = match &cli.track {
        Some(pattern) => Track::from_pattern(pattern)?,
        None => defaults.track,
    };

    Scenario::new(racers, track)
}

fn print_summary(report: &HarnessReport, quiet: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if quiet {
        if let Some(first) = report.repetitions.first() {
            match &first.result.winner {
                Some(winner) => {
                    writeln!(out, "\nWinner: {} ({:.3} sec)", winner, first.result.best_time)?
                }
                None => writeln!(out, "\nNobody finished the race (check speeds > 0).")?,
            }
        }
        writeln!(
            out,
            "Total time for all {} repetitions: {:.6} seconds",
            report.repetitions.len(),
            report.total.as_secs_f64()
        )?;
    } else {
        render_replay(&mut out, report)?;
    }

    out.flush()
}
