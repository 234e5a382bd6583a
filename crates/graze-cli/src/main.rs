//! Graze CLI - headless grazing simulation.
//!
//! Loads a scenario, ticks the herd, and prints the final pasture:
//! - `graze` - run the built-in meadow
//! - `graze --scenario pasture.yaml --realtime` - pace ticks at the scenario interval
//! - `graze --trace events.jsonl` - record every notification as JSON lines

mod render;
mod scenario;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graze_core::{SheepId, TickContext};
use graze_herd::{Herd, HerdError};
use graze_tools::{TraceObserver, VecTraceSink, PATH_CHOSEN, POSITION_CHANGED};

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "graze")]
#[command(about = "Headless grazing simulation", version)]
struct Cli {
    /// Scenario file (YAML). Runs the built-in meadow when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's tick count
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the scenario's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Wait the scenario's tick interval between ticks
    #[arg(long)]
    realtime: bool,

    /// Write every notification to this file as JSON lines
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Skip the final grid snapshot
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Totals {
    births: usize,
    moves: usize,
    paths: usize,
    regrown: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::meadow(),
    };
    if let Some(ticks) = cli.ticks {
        scenario.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }

    let mut herd = scenario.build()?;
    tracing::info!(
        width = scenario.width,
        height = scenario.height,
        sheep = herd.len(),
        ticks = scenario.ticks,
        seed = scenario.seed,
        "Starting simulation"
    );

    let mut trace = match &cli.trace {
        Some(path) => Some(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create trace file {}", path.display())
        })?)),
        None => None,
    };

    let totals = run(&scenario, &mut herd, cli.realtime, trace.as_mut()).await?;

    if let Some(out) = trace.as_mut() {
        out.flush().context("Failed to flush trace file")?;
    }

    if !cli.quiet {
        print!("{}", render::snapshot(herd.grid()));
    }
    println!(
        "{} ticks: {} sheep, {} births, {} moves, {} paths, {} tiles regrown",
        scenario.ticks,
        herd.len(),
        totals.births,
        totals.moves,
        totals.paths,
        totals.regrown
    );

    Ok(())
}

async fn run(
    scenario: &Scenario,
    herd: &mut Herd,
    realtime: bool,
    mut trace: Option<&mut BufWriter<File>>,
) -> Result<Totals> {
    let mut totals = Totals::default();
    let mut observer = TraceObserver::new(VecTraceSink::default());
    let mut interval =
        tokio::time::interval(Duration::from_millis(scenario.tick_interval_ms.max(1)));

    for tick in 0..scenario.ticks {
        if realtime {
            interval.tick().await;
        }
        observer.set_tick(tick);

        for request in scenario.paths.iter().filter(|r| r.tick == tick) {
            let sheep = SheepId(request.sheep);
            match herd.request_path_to(sheep, request.goal, request.algorithm, &mut observer) {
                Ok(path) => {
                    tracing::info!(
                        %sheep,
                        goal = %request.goal,
                        steps = path.len(),
                        "Path assigned"
                    );
                    totals.paths += 1;
                }
                Err(HerdError::UnknownSheep(id)) => {
                    tracing::warn!(sheep = %id, "Path request for a sheep that is gone");
                }
                Err(err) => return Err(err).context("Path request failed"),
            }
        }

        let report = herd
            .tick(&TickContext::new(tick, scenario.seed), &mut observer)
            .with_context(|| format!("Tick {tick} failed"))?;

        if cfg!(debug_assertions) {
            herd.check_occupancy()
                .with_context(|| format!("Occupancy audit failed after tick {tick}"))?;
        }

        let sink = observer.sink();
        totals.births += report.spawned.len();
        totals.moves += sink.count(POSITION_CHANGED);
        totals.regrown += report.regrown;
        tracing::debug!(
            tick,
            sheep = herd.len(),
            spawned = report.spawned.len(),
            paths_drawn = sink.count(PATH_CHOSEN),
            "Tick complete"
        );

        if let Some(out) = trace.as_deref_mut() {
            for event in &sink.events {
                serde_json::to_writer(&mut *out, event).context("Failed to write trace event")?;
                out.write_all(b"\n").context("Failed to write trace event")?;
            }
        }
        observer.sink_mut().clear();
    }

    Ok(totals)
}
