//! memlex CLI - lexical search over agent memory
//!
//! # Examples
//!
//! ```bash
//! # Split a transcript into blocks and statements
//! memlex segment notes/session.md
//!
//! # Search every markdown/text file under a directory
//! memlex search "cache eviction" --path ./transcripts
//!
//! # Any-token search, ids and scores only
//! memlex search "retry backoff" --path ./transcripts --any --ids-only
//!
//! # Show configuration
//! memlex show-config
//! ```

use clap::Parser;
use memlex::cli::output::print_error;
use memlex::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "memlex=warn".into());

    // stdout carries command output; logs go to stderr
    let json = std::env::var("MEMLEX_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
