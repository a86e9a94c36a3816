// File: crates/bench-plot/src/main.rs
// Summary: Loads the benchmark CSV and writes the QuadTree insert/range chart.

use anyhow::{Context, Result};
use bench_plot::{render, ChartConfig, Cli, MeasurementTable};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ChartConfig::from_cli(&cli);
    info!("using input file: {}", cli.input.display());

    let table = MeasurementTable::load(&cli.input)
        .with_context(|| format!("failed to load measurements from '{}'", cli.input.display()))?;

    render::render(&table, &config, &cli.output)
        .with_context(|| format!("failed to render chart to '{}'", cli.output.display()))?;

    Ok(())
}
