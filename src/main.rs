use clap::Parser;
use nrps_predict::utils::{logger, validation::Validate};
use nrps_predict::{CliConfig, MethodManifest, NrpsPksResults, Record};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nrps-predict");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(&config.record)?;
    let record: Record = serde_json::from_str(&raw)?;
    tracing::info!(
        "Loaded record {} with {} A domains",
        record.id,
        record.nrps_pks_domains().len()
    );

    let manifest = MethodManifest::from_path(&config.methods)?;
    let analysis = manifest.build_analysis(config.threshold)?;

    let results = analysis.run(&record, NrpsPksResults::new()).await?;

    let output = serde_json::json!({
        "record": record.id,
        "generated_at": chrono::Utc::now(),
        "results": results,
    });
    let rendered = serde_json::to_string_pretty(&output)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Results written to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
