use anyhow::Context;
use bvsdk_conversations::config::cli::{Command, OutputFormat};
use bvsdk_conversations::core::export;
use bvsdk_conversations::utils::logger;
use bvsdk_conversations::{CliConfig, ConversationsClient, ConversationsError, ErrorCategory};
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ Request failed: {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<ConversationsError>().map(|e| e.category()) {
            Some(ErrorCategory::Configuration) | Some(ErrorCategory::Validation) => 2,
            Some(ErrorCategory::Api) => 3,
            Some(ErrorCategory::Network) => 4,
            Some(ErrorCategory::Data) | None => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = cli.client_config().context("loading configuration")?;
    tracing::debug!("Using client {} (staging: {})", config.client_id, config.staging);

    let client = ConversationsClient::new(&config)?;
    let format = cli.format;

    let output = match &cli.command {
        Command::Product(args) => {
            let response = client.load(&args.to_request()?).await?;
            match format {
                OutputFormat::Json => to_json(&response)?,
                OutputFormat::Csv | OutputFormat::Tsv => {
                    anyhow::bail!("product output is only available as json")
                }
            }
        }
        Command::Reviews(args) => {
            let response = client.load(&args.to_request()?).await?;
            match delimiter(format) {
                Some(d) => export::reviews_to_delimited(&response.results, d)?,
                None => to_json(&response)?,
            }
        }
        Command::Questions(args) => {
            let response = client.load(&args.to_request()?).await?;
            match delimiter(format) {
                Some(d) => export::questions_to_delimited(&response.results, d)?,
                None => to_json(&response)?,
            }
        }
        Command::Ratings(args) => {
            let response = client.load(&args.to_request()?).await?;
            match delimiter(format) {
                Some(d) => export::ratings_to_delimited(&response.results, d)?,
                None => to_json(&response)?,
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn delimiter(format: OutputFormat) -> Option<u8> {
    match format {
        OutputFormat::Json => None,
        OutputFormat::Csv => Some(b','),
        OutputFormat::Tsv => Some(b'\t'),
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
