use orbsim::{bench_engine, bench_force};
use orbsim::{Engine, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the crate's scenarios/ directory
    #[arg(short, default_value = "halley.yaml")]
    file_name: String,

    /// Run the timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_force();
        bench_engine();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut engine = Engine::new(scenario);
    engine.run()?;

    // One summary line per body; the trajectories themselves are the output
    // consumed by whatever renders them
    for (body, traj) in engine.system().bodies.iter().zip(engine.trajectories()) {
        if let Some(x) = traj.last() {
            println!(
                "{:>10}: {} steps, final position [{:12.5e}, {:12.5e}, {:12.5e}] m",
                body.name,
                traj.len(),
                x[0],
                x[1],
                x[2],
            );
        }
    }

    Ok(())
}
