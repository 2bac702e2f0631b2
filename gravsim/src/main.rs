use gravsim::{Engine, Scenario, ScenarioConfig};
use gravsim::{bench_tick, run_2d};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D gravitational n-body simulation with merging collisions")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's `scenarios/` dir
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window and log a summary
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks (overrides `engine.max_ticks`)
    #[arg(long)]
    ticks: Option<u64>,

    /// Time the tick function over a range of body counts and exit
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    }
}

fn run_headless(mut scenario: Scenario) {
    let max = scenario.engine.max_ticks.unwrap_or(Engine::HEADLESS_TICKS);
    let sim = &mut scenario.simulator;

    while sim.ticks() < max {
        sim.tick();
        if sim.ticks() % 60 == 0 {
            debug!(tick = sim.ticks(), alive = sim.alive_count(), total_mass = sim.total_mass(), "progress");
        }
    }

    info!(
        ticks = sim.ticks(),
        time = sim.time(),
        alive = sim.alive_count(),
        total_mass = sim.total_mass(),
        "headless run finished"
    );
    for view in sim.snapshot() {
        info!(id = view.id, x = view.position.x, y = view.position.y, radius = view.radius, "body");
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let mut cfg = ScenarioConfig::load(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    if args.ticks.is_some() {
        cfg.engine.max_ticks = args.ticks;
    }
    info!(path = %path.display(), "loaded scenario");

    let scenario = Scenario::build_scenario(cfg)?;

    if args.headless {
        run_headless(scenario);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
