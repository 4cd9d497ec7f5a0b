//! dq: command line front end
//!
//!   dq endpoints                                   # list Figma endpoint keys
//!   dq fetch files FILE_KEY                        # GET /files/FILE_KEY
//!   dq fetch file_nodes FILE_KEY --query ids=1:2   # forward query parameters
//!   dq fetch user_me --output me.json              # dump the payload
//!   dq generate --ui @ui.txt --srs @srs.txt        # generate test cases
//!   dq compare Button --design "Sign Up:#FF5733" --website "Register:#FF0000"
//!
//! Credentials come from the environment or an env file, same as the server.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dq_core::Settings;
use dq_figma::{Endpoint, FigmaClient, QueryParams};
use dq_llm::OpenAiCompatibleClient;
use dq_testgen::{ComparisonRequest, DesignComparator, ElementProperties, TestCaseGenerator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "dq")]
#[command(about = "Figma explorer and test case generator")]
struct Cli {
    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported Figma endpoints
    Endpoints,

    /// Fetch one Figma endpoint and print the {data, error} pair
    Fetch {
        /// Endpoint key, e.g. files or user_me
        endpoint: String,

        /// Path parameter (file key, team id, ...)
        param: Option<String>,

        /// Extra query parameter as key=value (repeatable)
        #[arg(long = "query", short, value_name = "KEY=VALUE", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,

        /// Write the payload to a JSON file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate structured test cases from UI and SRS descriptions
    Generate {
        /// UI description, or @path to read it from a file
        #[arg(long)]
        ui: String,

        /// SRS description, or @path to read it from a file
        #[arg(long)]
        srs: String,

        /// Write the full result (timestamp, test cases, summary) as JSON
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate test cases for design vs website differences
    Compare {
        /// Element kind, e.g. Button
        element: String,

        /// Design properties as TEXT:COLOR
        #[arg(long, value_parser = parse_properties)]
        design: ElementProperties,

        /// Website properties as TEXT:COLOR
        #[arg(long, value_parser = parse_properties)]
        website: ElementProperties,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = dq_core::config::load_environment() {
        debug!("Environment loaded from {}", path);
    }
    let settings = Settings::from_env()?;

    match cli.command {
        Command::Endpoints => {
            for endpoint in Endpoint::ALL {
                println!("{:<16} {}", endpoint.key(), endpoint.template());
            }
            Ok(())
        }
        Command::Fetch {
            endpoint,
            param,
            query,
            output,
        } => {
            let param = param.unwrap_or_default();
            fetch(&settings, &endpoint, &param, query, output).await
        }
        Command::Generate { ui, srs, output } => generate(&settings, &ui, &srs, output).await,
        Command::Compare {
            element,
            design,
            website,
        } => {
            let comparator =
                DesignComparator::new(Arc::new(OpenAiCompatibleClient::xai_from_settings(&settings)));
            let request = ComparisonRequest {
                element,
                design,
                website,
            };
            println!("{}", comparator.compare(&request).await?);
            Ok(())
        }
    }
}

async fn fetch(
    settings: &Settings,
    endpoint: &str,
    param: &str,
    query: QueryParams,
    output: Option<PathBuf>,
) -> Result<()> {
    let client = FigmaClient::from_settings(settings);
    let query = (!query.is_empty()).then_some(query);

    let result = match &output {
        Some(path) => {
            client
                .fetch_and_dump(endpoint, param, query.as_ref(), path)
                .await?
        }
        None => client.fetch(endpoint, param, query.as_ref()).await,
    };

    match (&output, result.is_ok()) {
        (Some(path), true) => eprintln!("Wrote {}", path.display()),
        _ => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(message) = result.error_message() {
        bail!("{}", message);
    }
    Ok(())
}

async fn generate(settings: &Settings, ui: &str, srs: &str, output: Option<PathBuf>) -> Result<()> {
    let ui = read_arg(ui).await?;
    let srs = read_arg(srs).await?;

    let generator =
        TestCaseGenerator::new(Arc::new(OpenAiCompatibleClient::groq_from_settings(settings)));
    let result = generator.generate_report(&ui, &srs).await?;

    println!("{}", result.summary);
    if let Some(path) = output {
        dq_figma::dump::write_json(&path, &serde_json::to_value(&result)?).await?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

/// `@path` reads the file, anything else is used verbatim
async fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path)),
        None => Ok(arg.to_string()),
    }
}

fn parse_query_pair(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Split on the last colon so the text itself may contain colons
fn parse_properties(raw: &str) -> std::result::Result<ElementProperties, String> {
    match raw.rsplit_once(':') {
        Some((text, color)) if !color.trim().is_empty() => Ok(ElementProperties {
            text: text.to_string(),
            color: color.trim().to_string(),
        }),
        _ => Err(format!("expected TEXT:COLOR, got '{}'", raw)),
    }
}
