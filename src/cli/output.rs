//! Output formatting for CLI commands
//!
//! Human-readable rendering of ingest summaries, search hits and
//! statistics. Colors respect the NO_COLOR env var.

use crate::core::index::DocumentId;
use crate::core::types::{IngestStats, NodeKind};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Labels, headers and query echoes
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Message sources
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow().bold()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Secondary text: offsets, previews, summaries
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// BM25 scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Result ranks and block indexes
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

const BYTE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Byte count with a binary unit, one decimal above 1 KB
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", BYTE_UNITS[unit])
}

/// Milliseconds as "850ms", "1.25s" or "2m 5.5s"
pub fn format_duration_ms(ms: u64) -> String {
    match ms {
        0..=999 => format!("{ms}ms"),
        1_000..=59_999 => format!("{:.2}s", ms as f64 / 1000.0),
        _ => {
            let secs = (ms % 60_000) as f64 / 1000.0;
            format!("{}m {secs:.1}s", ms / 60_000)
        }
    }
}

/// Scores are shown with four decimals so near-ties stay visible
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// One-line summary of a directory ingest
pub fn ingest_summary(stats: &IngestStats) -> String {
    format!(
        "Ingested {} message(s), {} documents ({}) in {}",
        stats.messages,
        stats.documents,
        format_bytes(stats.bytes),
        format_duration_ms(stats.duration_ms)
    )
}

/// Heading line for one search hit
pub fn hit_heading(
    rank: usize,
    source: Option<&str>,
    kind: NodeKind,
    document_id: DocumentId,
    message_id: DocumentId,
    score: f64,
) -> String {
    format!(
        "[{}] {} {} {}",
        colors::rank(&rank.to_string()),
        colors::file_path(source.unwrap_or("-")),
        colors::label(&kind.to_string()),
        colors::dim(&format!(
            "(doc {document_id}, message {message_id}, score {})",
            format_score(score)
        ))
    )
}

/// Cut a preview line on a character boundary, marking the cut with "..."
pub fn preview_line(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let kept: String = line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
