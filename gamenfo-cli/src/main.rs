//! gamenfo CLI
//!
//! Command-line interface for rendering game metadata documents as NFO or
//! JSON. Output goes to stdout; redirect it to save the document.

mod commands;
mod error;
mod settings;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use error::CliError;

#[derive(Parser)]
#[command(name = "gamenfo")]
#[command(about = "Render game metadata documents as NFO", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Settings file to use instead of ~/.config/gamenfo/settings.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a metadata document (.json, .yaml, or - for JSON on stdin)
    Render {
        /// Input document
        input: PathBuf,

        /// Output format (e.g., nfo, json); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List available output formats
    Formats,

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_path = cli.config.unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings(&settings_path)?;

    match cli.command {
        Commands::Render { input, format } => {
            commands::render::run_render(&input, format.as_deref(), &settings)
        }
        Commands::Formats => {
            commands::formats::run_formats(&settings.render.format);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings_path, &settings),
            ConfigAction::Path => {
                commands::config::run_config_path(&settings_path);
                Ok(())
            }
        },
    }
}

/// Log to stderr so rendered documents on stdout stay clean. `RUST_LOG`
/// overrides the level picked from the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
