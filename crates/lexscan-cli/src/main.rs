mod analyze;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use lexscan_core::{
    Analyzer, Category, Config, GenerationConfig, GenerationParams, Generator, InferenceClient,
};

#[derive(Parser)]
#[command(name = "lexscan")]
#[command(about = "AI legal analysis tool", version, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ./lexscan.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the analysis page
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not open a browser tab
        #[arg(long)]
        no_open: bool,
    },
    /// Analyze text once and print the result
    Analyze {
        /// Analysis type: a full label or general, contract, patent, risk
        #[arg(short, long, default_value = "contract")]
        category: Category,
        /// Legal text (read from stdin when omitted)
        text: Vec<String>,
    },
    /// List analysis categories and their instructions
    Categories,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Keep stdout clean for one-shot output
    let default_filter = match cli.command {
        Commands::Serve { .. } => "lexscan=info,lexscan_core=info,tower_http=info",
        _ => "lexscan=warn,lexscan_core=warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve { host, port, no_open } => {
            let serve_config = serve::ServeConfig {
                host: host.unwrap_or(config.server.host),
                port: port.unwrap_or(config.server.port),
                open_browser: config.server.open_browser && !no_open,
            };
            serve::start_server(serve_config, build_analyzer(&config.generation)).await?;
        }
        Commands::Analyze { category, text } => {
            let analyzer = build_analyzer(&config.generation);
            analyze::run(&analyzer, category, text).await?;
        }
        Commands::Categories => {
            for category in Category::ALL {
                let marker = if category == Category::UI_DEFAULT { " (default)" } else { "" };
                println!("{}{}", category.label(), marker);
                println!("  {}\n", category.template());
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml_string());
        }
    }

    Ok(())
}

/// Build the analyzer backed by the configured inference endpoint.
fn build_analyzer(config: &GenerationConfig) -> Analyzer<Box<dyn Generator>> {
    let client: Box<dyn Generator> = Box::new(InferenceClient::from_config(config));
    Analyzer::new(client).with_params(GenerationParams::from(config))
}
