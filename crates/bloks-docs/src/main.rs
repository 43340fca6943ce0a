//! Bloks docs CLI - scaffold, check and inspect the site configuration.

use std::path::PathBuf;

use anyhow::Result;
use bloks_config::ConfigFormat;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "bloks-docs")]
#[command(about = "Site configuration tooling for the Bloks documentation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site config file (.toml, .json, .yaml)
    #[arg(short, long, default_value = "docs.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the Bloks site config
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,

        /// Output format (must match the config file extension)
        #[arg(short, long)]
        format: Option<ConfigFormat>,
    },

    /// Validate the site config
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the normalized site config
    Show {
        /// Output format
        #[arg(short, long, default_value = "json")]
        format: ConfigFormat,
    },

    /// Print the document title for a page
    Title {
        /// Page title, or a sidebar link with --route
        page: String,

        /// Look the page up by sidebar link
        #[arg(short, long)]
        route: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes, format } => {
            commands::init::run(&cli.config, yes, format).await?;
        }
        Commands::Check { strict } => {
            commands::check::run(&cli.config, strict).await?;
        }
        Commands::Show { format } => {
            let output = commands::show::run(&cli.config, format).await?;
            print!("{}", output);
        }
        Commands::Title { page, route } => {
            let title = commands::title::run(&cli.config, &page, route).await?;
            println!("{}", title);
        }
    }

    Ok(())
}
