use anyhow::{Context, Result};
use clap::Parser;
use genetica_lib::model::body_plan::BodyPlan;
use genetica_lib::model::config::AppConfig;
use genetica_lib::model::metrics::{init_logging, Metrics};
use genetica_lib::model::sequencer::sequence;
use genetica_lib::model::state::Genome;
use genetica_lib::model::GrnLogic;
use genetica_lib::report::{stimulate, OrganismReport};
use std::path::Path;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Genome JSON file: an object mapping chromosome keys to base strings
    #[arg(short, long)]
    genome: String,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Regulatory network ticks to run after decoding
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,

    /// Level held on receptor and morphogen factors while ticking
    #[arg(long, default_value_t = 0.0)]
    stimulus: f32,

    /// Print the body plan as Graphviz DOT instead of the JSON report
    #[arg(long)]
    dot: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    AppConfig::from_toml(&content).with_context(|| format!("parsing config {path}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args.config)?;

    init_logging(&config.log.level);

    let text = std::fs::read_to_string(&args.genome)
        .with_context(|| format!("reading genome {}", args.genome))?;
    let genome: Genome = serde_json::from_str(&text).context("parsing genome")?;
    tracing::info!(
        chromosomes = genome.len(),
        fingerprint = %genome.fingerprint(),
        config = %config.fingerprint(),
        "Loaded genome"
    );

    let metrics = Metrics::new();
    let result = sequence(&genome, &config);
    metrics.record_sequence(result.is_ok());
    let mut lifeform = result.context("sequencing genome")?;

    if args.dot {
        print!("{}", BodyPlan::build(&lifeform).to_dot());
        return Ok(());
    }

    for _ in 0..args.ticks {
        let start = Instant::now();
        stimulate(&mut lifeform.grn, args.stimulus);
        if config.grn.parallel {
            lifeform.grn.update_parallel();
        } else {
            lifeform.grn.update();
        }
        metrics.record_tick(start.elapsed(), lifeform.grn.units.len());
    }
    tracing::info!(
        ticks = metrics.ticks(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Finished"
    );

    let report = OrganismReport::new(&genome, &lifeform, args.ticks);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
