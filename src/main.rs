use gravsim::simulation::diagnostics::{energy_history, relative_energy_drift, total_momentum};
use gravsim::{NoProgress, ProgressBar, ProgressSink, Scenario};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

/// Direct-summation gravitational N-body integrator
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file (YAML)
    #[arg(short, long, default_value = "scenarios/two_body.yaml")]
    file: PathBuf,

    /// Disable the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Override the step size
    #[arg(long)]
    dt: Option<f64>,

    /// Override the integration time range
    #[arg(long)]
    iteration_time: Option<f64>,

    /// Override the recording interval
    #[arg(long)]
    record_interval: Option<f64>,

    /// Keep the initial velocities instead of moving to the zero-momentum frame
    #[arg(long)]
    no_zero_momentum: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = Scenario::from_path(&args.file)
        .with_context(|| format!("failed to load scenario {}", args.file.display()))?;

    let p = &mut scenario.parameters;
    if let Some(dt) = args.dt {
        p.dt = dt;
    }
    if let Some(iteration_time) = args.iteration_time {
        p.iteration_time = iteration_time;
    }
    if let Some(record_interval) = args.record_interval {
        p.record_interval = record_interval;
    }
    if args.no_zero_momentum {
        p.zero_momentum = false;
    }
    if args.quiet {
        p.verbose = false;
    }
    Ok(scenario)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;
    let p = &scenario.parameters;

    println!("particles: {}", scenario.n());
    println!("Time:      {:.6}", p.iteration_time);
    println!("Step:      {:.6e}", p.dt);
    println!("Record:    {:.6}", p.record_interval);

    let mut bar = ProgressBar::default();
    let mut quiet = NoProgress;
    let sink: &mut dyn ProgressSink = if p.verbose { &mut bar } else { &mut quiet };

    let start = std::time::Instant::now();
    let history = scenario.run(sink)?;
    let elapsed = start.elapsed();

    let energies = energy_history(&history, &scenario.mass);
    println!("snapshots: {}", history.len());
    if let Some(last) = history.last() {
        println!("final t:   {:.6}", last.t);
        println!("positions:{}", last.r);
        println!("velocities:{}", last.v);
        println!("momentum:  {:?}", total_momentum(last.v, &scenario.mass).as_slice());
    }
    println!("max relative energy drift: {:.3e}", relative_energy_drift(&energies));
    println!("Time: {:.3}s", elapsed.as_secs_f64());

    Ok(())
}
