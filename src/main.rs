use batch_etl::adapters::{ConsoleSink, SimulatedChannel, SyntheticExtractor, SystemClock};
use batch_etl::utils::logger;
use batch_etl::{CliConfig, ImportPipeline};
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting batch-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.pipeline_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let extractor = SyntheticExtractor::new(cli.record_count);
    let channel = SimulatedChannel::new(Duration::from_millis(cli.latency_ms));
    let pipeline = ImportPipeline::new(config, extractor, channel, SystemClock, ConsoleSink)?;

    match pipeline.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Import run completed: {}/{} batches succeeded",
                report.successful,
                report.total_batches
            );
            if !report.is_successful() {
                // some batches failed; the report already lists them
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Import run failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
