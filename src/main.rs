use orbitsim::{load_scenario, run_2d, Scenario};
use orbitsim::{bench_energy_drift, bench_tick, energy_drift};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D planetary N-body simulation")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's `scenarios/` dir
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: PathBuf,

    /// Run the tick benchmarks instead of opening a window
    #[arg(long)]
    bench: bool,

    /// Run this many ticks without a window and print a summary
    #[arg(long, value_name = "TICKS")]
    headless: Option<usize>,
}

fn resolve_scenario_path(file_name: PathBuf) -> PathBuf {
    if file_name.exists() {
        return file_name;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn run_headless(mut scenario: Scenario, ticks: usize) {
    let e0 = scenario.system.total_energy();
    scenario.engine.run(&mut scenario.system, ticks);
    let e1 = scenario.system.total_energy();

    println!("t = {:.0} s after {} ticks", scenario.system.t, scenario.engine.ticks());
    let kind = if e0 == 0.0 { "abs" } else { "rel" };
    println!("energy: {:.6e} -> {:.6e} J ({} drift {:.3e})", e0, e1, kind, energy_drift(e0, e1));
    for b in &scenario.system.bodies {
        let x = b.position();
        let v = b.velocity();
        println!(
            "{:>10}  x = ({:.4e}, {:.4e}) m  v = ({:.4e}, {:.4e}) m/s",
            b.name(), x.x, x.y, v.x, v.y
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick()?;
        bench_energy_drift()?;
        return Ok(());
    }

    let path = resolve_scenario_path(args.file_name);
    let scenario_cfg = load_scenario(&path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    match args.headless {
        Some(ticks) => run_headless(scenario, ticks),
        None => run_2d(scenario),
    }

    Ok(())
}
