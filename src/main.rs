//! Command-line entry point for the Beantheory site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use beantheory::config::{self, Config, Settings};
use beantheory::server::{self, ROUTES};

#[derive(Parser)]
#[command(name = "bean", version, about = "Beantheory seminar listing site")]
struct Cli {
    /// Explicit configuration file; skips the standard discovery.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server.
    Serve {
        /// Bind host.
        #[arg(long, default_value = "127.0.0.1", env = "BEANTHEORY_HOST")]
        host: String,
        /// Bind port.
        #[arg(long, default_value_t = config::DEFAULT_PORT, env = "BEANTHEORY_PORT")]
        port: u16,
        /// Disable stylesheet caching.
        #[arg(long)]
        debug: bool,
    },
    /// Print the route table.
    Routes,
    /// Print the effective settings.
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("beantheory=info,bean=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => {
            let mut settings = Settings::default();
            Config::from_toml_file(path)?.apply_to_settings(&mut settings);
            settings
        }
        None => config::load_settings().await,
    };

    match cli.command {
        Commands::Serve { host, port, debug } => {
            settings.debug = settings.debug || debug;
            server::serve(&settings, &host, port).await
        }
        Commands::Routes => {
            let mut routes = ROUTES.to_vec();
            routes.sort_by_key(|(path, _)| *path);
            for (path, endpoint) in routes {
                println!("{path}  ->  {endpoint}");
            }
            Ok(())
        }
        Commands::Config => {
            println!("{settings:#?}");
            Ok(())
        }
    }
}
