//! festive — Dijkstra vs A* on the east-coast network during holiday traffic.
//!
//! Seeds the nine-location reference network, perturbs the main corridor
//! with a seeded congestion script, then runs both strategies under each
//! criteria mode and prints them side by side.  `--csv` additionally writes
//! one row per run for regression diffs.
//!
//! Congestion factors come from `SimRng`, so a seed reproduces the same
//! factors across runs of this binary only.  Totals and routes will differ
//! from printouts produced with another random generator for the same seed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mcr_core::{ScenarioConfig, SimRng};
use mcr_network::{CongestionScript, SharedNetwork, festive_network};
use mcr_report::{CsvReport, render_comparison};
use mcr_search::{AStarSearch, Comparison, Criteria, DijkstraSearch, HeuristicTable, compare};

/// Totals closer than this count as the same answer.
const AGREEMENT_EPSILON: f64 = 1e-6;

#[derive(Debug, Parser)]
#[command(name = "festive", about = "Compare Dijkstra and A* under festive congestion")]
struct Cli {
    /// JSON scenario file; missing fields take their defaults.
    #[arg(long, env = "MCR_CONFIG")]
    config: Option<PathBuf>,

    /// Override the scenario seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Write one CSV row per (criteria, strategy) run to this file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log at debug level (overridden by MCR_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("MCR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    // A second init (e.g. from a test harness) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn heading(criteria: Criteria) -> &'static str {
    match criteria {
        Criteria::Time     => "=== Time-Optimized Path ===",
        Criteria::Cost     => "=== Cost-Optimized Path ===",
        Criteria::Balanced => "=== Balanced Path (Time and Cost) ===",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ScenarioConfig::from_json_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    info!(seed = config.seed, start = %config.start, end = %config.end, "scenario loaded");

    // ── Build + congest (write epoch) ─────────────────────────────────────
    let shared = SharedNetwork::new(festive_network()?);
    {
        let mut net = shared.write()?;
        let script = CongestionScript::festive_with_range(config.congestion_min, config.congestion_max);
        let applied = script.apply(&mut net, &mut SimRng::new(config.seed))?;
        for a in applied.iter().filter(|a| !a.applied) {
            warn!(source = %a.source, destination = %a.destination, "congestion target missing");
        }
    }

    // ── Search (read epoch) ───────────────────────────────────────────────
    let net = shared.read()?;
    let start = net.require(&config.start)?;
    let end = net.require(&config.end)?;

    let mut table = HeuristicTable::festive(&net)?;
    table.set_default_estimate(config.default_heuristic)?;
    let astar = AStarSearch::new(table);

    let mut report = match &cli.csv {
        Some(path) => Some(
            CsvReport::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => None,
    };

    for (i, criteria) in Criteria::ALL.into_iter().enumerate() {
        let runs = compare(&net, start, end, criteria, &[&DijkstraSearch, &astar])?;
        if !Comparison::all_agree(&runs, AGREEMENT_EPSILON) {
            warn!(%criteria, "dijkstra and astar disagree; heuristic may be inadmissible");
        }

        if i > 0 {
            println!();
        }
        println!("{}", heading(criteria));
        print!(
            "{}",
            render_comparison(&net, runs[0].result.as_ref(), runs[1].result.as_ref(), &config.currency)
        );

        if let Some(report) = report.as_mut() {
            report.write_comparisons(&net, &runs)?;
        }
    }

    if let Some(mut report) = report {
        report.finish()?;
    }
    Ok(())
}
