use cartsim::{ScenarioConfig, Scenario};
use cartsim::{bench_step, bench_tick};
use cartsim::write_csv_file;
use cartsim::export::csv_export::DEFAULT_FILE_NAME;
use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under the crate's scenarios/ directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Where to write the CSV export, overrides the scenario's output.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg);
    let summary = scenario.run_headless();

    let energies = scenario.engine.energies();
    println!(
        "t = {:.4} s after {} steps ({} ticks), {}",
        summary.t,
        summary.steps,
        summary.ticks,
        if summary.auto_stopped { "carts at rest" } else { "time limit reached" }
    );
    println!(
        "Emec = {:.6} J, Ediss = {:.6} J, Etot = {:.6} J, p = {:.6} kg·m/s",
        energies.emec, energies.ediss, energies.etot, energies.p
    );

    let csv_path = args.output
        .or_else(|| scenario_cfg.output.csv.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
    let samples = scenario.engine.snapshot();
    write_csv_file(&csv_path, &samples)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    println!("wrote {} samples to {}", samples.len(), csv_path.display());

    Ok(())
}
