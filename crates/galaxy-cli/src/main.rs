use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use galaxy::{AnalyticDiskVerlet, GalaxyConfig, ParticleField};
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Generate a spiral-galaxy star field and evolve it")]
struct Args {
    /// Scenario YAML; built-in defaults are used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of integration steps to take
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write a YAML snapshot of the final state here
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<GalaxyConfig> {
    let Some(path) = path else {
        return Ok(GalaxyConfig::default());
    };

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn write_snapshot(field: &ParticleField, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_yaml::to_writer(BufWriter::new(file), &field.snapshot())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn log_summary(field: &ParticleField) {
    let view = field.render_view();
    let n = view.len().max(1) as f64;
    let mean_r = view
        .positions
        .iter()
        .map(|p| p.coords.xy().norm())
        .sum::<f64>()
        / n;
    let mean_z = view.positions.iter().map(|p| p.z.abs()).sum::<f64>() / n;
    let hottest = field.temperatures().iter().copied().fold(0.0, f64::max);

    info!(
        "t = {:.2} ({} steps): mean R = {:.2}, mean |z| = {:.2}",
        field.elapsed(),
        field.steps(),
        mean_r,
        mean_z
    );
    info!(
        "Brightest star {:.3e} L☉, hottest {:.0} K",
        view.max_luminosity().unwrap_or(0.0),
        hottest
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config(args.file.as_deref())?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!("Scenario: {:?}", config);

    let mut field = ParticleField::new(config).context("invalid scenario")?;
    info!(
        "Generated {} stars, total mass {:.3} M☉",
        field.len(),
        field.total_mass()
    );
    log_summary(&field);

    field.run(&AnalyticDiskVerlet::new(), args.steps);
    log_summary(&field);

    if let Some(path) = args.snapshot.as_deref() {
        write_snapshot(&field, path)?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
