use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use blogagent_client::Config;
use blogagent_core::{FormInput, Tone};

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "blogagent", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the generation backend (default: http://127.0.0.1:5000)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Fabricate placeholder content locally instead of contacting the backend
    #[arg(long, global = true)]
    demo: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Open the interactive generation form
    ///
    /// Collects a title, optional keywords, and a tone, submits them to
    /// the backend, and renders the returned markdown in the terminal.
    /// Tab cycles fields, Left/Right picks a tone, Ctrl+Enter submits,
    /// Up/Down scrolls the result, Esc quits.
    ///
    /// This is the default when no subcommand is given.
    Tui,
    /// Generate one blog post and print the markdown
    Generate {
        /// Blog post title (required, must be non-blank)
        #[arg(long)]
        title: String,

        /// Keywords, free text (e.g. comma separated)
        #[arg(long, default_value = "")]
        keywords: String,

        /// Writing tone: neutral, casual, professional, enthusiastic,
        /// authoritative, or friendly (default: neutral)
        #[arg(long)]
        tone: Option<Tone>,

        /// Write the markdown to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Create the config file with commented defaults
    Init,
    /// Show the current effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.endpoint {
        Some(endpoint) => Config::load_with_endpoint(endpoint)?,
        None => Config::load()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let demo = cli.demo || config.demo_mode;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tui::run_tui(config, demo).await?;
        }
        Commands::Generate {
            title,
            keywords,
            tone,
            output,
        } => {
            let input = FormInput {
                title,
                keywords,
                tone,
            };
            commands::run_generate(&config, input, demo, output).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::init_config()?,
            ConfigAction::Show => commands::show_config()?,
            ConfigAction::Path => {
                println!("{}", blogagent_client::config::config_file_path().display());
            }
        },
    }

    Ok(())
}
