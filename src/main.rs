use clap::Parser;
use contract_etl::core::ConfigProvider;
use contract_etl::utils::{logger, validation::Validate};
use contract_etl::{CliConfig, ContractPipeline, ConvertEngine, LocalStorage, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contract-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let storage = LocalStorage::new(cli.dir.clone());

    let exit_code = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            config.apply_dry_run_override(cli.dry_run);
            convert(storage, config).await
        }
        None => convert(storage, cli).await,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn convert<C>(storage: LocalStorage, config: C) -> i32
where
    C: ConfigProvider + Validate + 'static,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.failure_report());
        return e.exit_code();
    }

    let top_universities = config.top_universities();
    let dry_run = config.dry_run();
    let engine = ConvertEngine::new(ContractPipeline::new(storage, config))
        .with_top_universities(top_universities)
        .with_dry_run(dry_run);

    match engine.run().await {
        Ok(summary) => {
            tracing::debug!(
                output = ?summary.output_path,
                records = summary.record_count,
                invalid = summary.invalid_lines.len(),
                "Run summary"
            );
            0
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            if e.reports_to_stdout() {
                println!("{}", e.failure_report());
            } else {
                eprintln!("{}", e.failure_report());
            }

            e.exit_code()
        }
    }
}
