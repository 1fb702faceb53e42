//! crossing — drives the single-intersection simulator from the command line.
//!
//! ```text
//! crossing [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the classic scenario runs: a 15×15 grid, 10
//! vehicles, signal flipping every 10 ticks.  Entity snapshots and tick
//! summaries land in `OUTPUT_DIR` (default `output/crossing`) as CSV.
//! Set `RUST_LOG=debug` to see every phase flip.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use cx_core::{SimConfig, Tick};
use cx_output::{CsvWriter, OutputWriter, SimOutputObserver};
use cx_sim::{Entity, Phase, SimBuilder, SimObserver, TickStats};

const DEFAULT_OUTPUT_DIR: &str = "output/crossing";

// ── Observer wrapper that also tallies movement ──────────────────────────────

struct TallyObserver<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    flips:   usize,
    moved:   usize,
    wrapped: usize,
    blocked: usize,
}

impl<W: OutputWriter> TallyObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, flips: 0, moved: 0, wrapped: 0, blocked: 0 }
    }
}

impl<W: OutputWriter> SimObserver for TallyObserver<W> {
    fn on_phase_change(&mut self, tick: Tick, phase: Phase) {
        self.flips += 1;
        info!("{tick}: signal → {phase}");
    }

    fn on_tick_end(&mut self, tick: Tick, phase: Phase, stats: &TickStats) {
        self.moved += stats.moved;
        self.wrapped += stats.wrapped;
        self.blocked += stats.blocked;
        self.inner.on_tick_end(tick, phase, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, entities: &[Entity]) {
        self.inner.on_snapshot(tick, entities);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("=== crossing — single-intersection traffic ===");
    println!(
        "Grid: {}x{}  |  Vehicles: {}  |  Signal period: {}  |  Ticks: {}  |  Seed: {}",
        config.width,
        config.height,
        config.vehicle_count,
        config.signal_period,
        config.total_ticks,
        config.seed,
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config).build()?;
    println!("Lane map (divider row {}):", sim.lanes().divider_row());
    print!("{}", sim.lanes());
    println!();

    // 2. Set up output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = TallyObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let started = Instant::now();
    sim.run(&mut obs);
    let elapsed = started.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing simulation output");
    }

    // 4. Report.
    println!(
        "Ran {} ticks in {:.2?}: {} phase flips, {} moves, {} wraps, {} blocked attempts",
        sim.tick().0,
        elapsed,
        obs.flips,
        obs.moved,
        obs.wrapped,
        obs.blocked,
    );
    println!("Final phase: {}", sim.phase());
    println!("Output written to {}", out_dir.display());
    println!();

    println!("{:<8} {:<8} {:<10} {:<6}", "vehicle", "heading", "cell", "near");
    for v in sim.vehicles() {
        println!(
            "{:<8} {:<8} {:<10} {:<6}",
            v.id().0,
            v.direction(),
            v.cell().to_string(),
            if v.near_intersection() { "yes" } else { "no" },
        );
    }

    Ok(())
}
