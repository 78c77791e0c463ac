use clap::Parser;
use searchterms::{load, Error};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "searchterms")]
#[command(about = "Analyze a free-text search query into what, when and where facets")]
#[command(version)]
struct Args {
    /// Search query (words are joined with spaces)
    query: Vec<String>,

    /// Dictionary JSON file (default: built-in English)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Gazetteer JSON file; enables place extraction
    #[arg(short, long)]
    gazetteer: Option<PathBuf>,

    /// Analyzer configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference time for relative dates, RFC 3339 (default: now)
    #[arg(long)]
    now: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    searchterms::tracing::init_with_filter(&args.log_level);

    let analyzer = load::build_analyzer(
        args.dictionary.as_deref(),
        args.gazetteer.as_deref(),
        args.config.as_deref(),
    )?;
    let now = load::parse_now(args.now.as_deref())?;

    let query = args.query.join(" ");
    let result = analyzer.analyze_at(&query, now).map_err(Error::from)?;

    info!(
        words = result.processed_words.len(),
        errors = result.errors.len(),
        seconds = result.processing_time_seconds,
        "query analyzed"
    );

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}
