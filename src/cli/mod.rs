//! CLI adapter for memlex
//!
//! Provides a command-line interface to the segmenter, tokenizer and
//! lexical store. Depends on `core/`; nothing in `core/` depends on
//! this module.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// memlex - lexical memory search for agent transcripts
///
/// Segments messages into blocks and statements, indexes every part
/// and answers keyword queries ranked with BM25.
#[derive(Parser, Debug)]
#[command(name = "memlex")]
#[command(version)]
#[command(about = "Lexical search over agent memory", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a message into blocks and statements
    Segment(commands::SegmentArgs),

    /// Show the tokens produced for some text
    Tokenize(commands::TokenizeArgs),

    /// Ingest a directory and search it with BM25 ranking
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and store information
    Info(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  memlex completions bash > ~/.local/share/bash-completion/completions/memlex
    ///   zsh:   memlex completions zsh > ~/.zfunc/_memlex
    ///   fish:  memlex completions fish > ~/.config/fish/completions/memlex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    XdgDirs::new().log_paths();
    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Segment(args) => commands::segment::execute(args, &services, cli.format),
        Commands::Tokenize(args) => commands::tokenize::execute(args, &services, cli.format),
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Info(args) => commands::info::execute(args, &services, cli.format),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
