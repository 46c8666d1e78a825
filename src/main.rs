use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use mstbench_core::BenchmarkConfig;
use mstbench_report::{read_dataset, run_dataset, write_comparison_csv, write_results};

/// Compare Prim's and Kruskal's minimum spanning tree algorithms
///
/// Warmup and measurement repetitions come from the MST_WARMUP_RUNS
/// (default 3) and MST_MEASUREMENT_RUNS (default 7) environment variables.
#[derive(Parser, Debug)]
#[command(name = "mstbench")]
#[command(about = "Prim vs Kruskal MST benchmark", long_about = None)]
struct Args {
    /// Input dataset (JSON with a "graphs" array)
    #[arg(default_value = "data/input.json")]
    input: PathBuf,

    /// Results document (JSON)
    #[arg(default_value = "results/output.json")]
    output: PathBuf,

    /// Comparison table (CSV)
    #[arg(default_value = "results/comparison.csv")]
    csv: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting mstbench v{}", env!("CARGO_PKG_VERSION"));
    info!("Input dataset: {:?}", args.input);

    let dataset = read_dataset(&args.input)?;
    info!("Loaded {} graphs", dataset.len());

    let config = BenchmarkConfig::from_env();
    let started = Instant::now();
    let results = run_dataset(&dataset, &config)?;
    info!("Benchmarks finished in {:.1?}", started.elapsed());

    ensure_parent_dir(&args.output)?;
    ensure_parent_dir(&args.csv)?;
    write_results(&args.output, &results)?;
    info!("Results written to {:?}", args.output);
    write_comparison_csv(&args.csv, &results)?;
    info!("Comparison table written to {:?}", args.csv);

    Ok(())
}
