use orbwatch::{DemoHost, EnergyLog, EventKind, Host, Monitor, ScenarioConfig};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "outer_planets.yaml")]
    file_name: String,

    /// Where the energy diagnostics CSV is appended
    #[arg(long, default_value = "energylog.csv")]
    energy_log: PathBuf,

    #[arg(long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set tracing subscriber");

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    let mut host = DemoHost::build(&scenario_cfg);
    ensure!(
        host.particles().len() > 1,
        "scenario needs a central body and at least one particle"
    );

    // the step size must resolve the innermost orbit, otherwise removals near
    // the inner bound are integration artifacts
    let innermost = host
        .innermost_period()
        .context("no particle has resolvable bound orbital elements")?;
    let min_steps = scenario_cfg.monitor.min_steps_per_orbit;
    ensure!(
        scenario_cfg.parameters.h0 < innermost / min_steps,
        "step size {} too coarse for innermost period {} (need < {})",
        scenario_cfg.parameters.h0,
        innermost,
        innermost / min_steps
    );
    info!("innermost orbital period is {innermost}");

    let mut monitor = Monitor::from_config(&scenario_cfg, Some(EnergyLog::new(&args.energy_log)));

    info!("start");
    while host.time() < scenario_cfg.parameters.t_end {
        host.step();
        monitor.step(&mut host);
    }

    for kind in [EventKind::Escape, EventKind::SunCollision, EventKind::WideOrbit] {
        for record in monitor.recorder().log(kind).iter() {
            info!("{}: t={} hash={}", kind, record.time, record.hash);
        }
    }
    info!(
        "finished: N={}, mass credited to central body: {}",
        host.particles().len(),
        monitor.ledger().transferred()
    );

    Ok(())
}
