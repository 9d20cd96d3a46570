use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::error;

use lyrstat::analyzer::{Analysis, Analyzer, DISTRIBUTION_SIZE};
use lyrstat::corpus::Corpus;
use lyrstat::stopwords::Language;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Descriptive statistics for song-lyric corpora", long_about = None)]
struct Args {
    /// Corpus root: one subdirectory per genre/era category
    #[arg(short, long, default_value = "songs")]
    root: PathBuf,

    /// Stopword language: spanish or english
    #[arg(short, long, default_value = "english")]
    language: Language,

    /// Category to browse; omit to list the available categories
    #[arg(short, long)]
    category: Option<String>,

    /// Analyze every song in the category
    #[arg(long)]
    all: bool,

    /// How many top words to print (capped at 20, the ranking depth a
    /// report carries)
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Emit reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Song file names to analyze; omit to list the category's songs
    songs: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let corpus = Corpus::open(&args.root)
        .with_context(|| format!("failed to open corpus at {}", args.root.display()))?;

    let Some(category) = args.category.as_deref() else {
        println!("Categories under {}:", args.root.display());
        for name in corpus.categories()? {
            println!("  {name}");
        }
        return Ok(());
    };

    let documents = corpus.documents(category)?;

    let selected: Vec<String> = if args.all {
        documents.keys().cloned().collect()
    } else if args.songs.is_empty() {
        println!("Songs in {category} ({}):", documents.len());
        for name in documents.keys() {
            println!("  {name}");
        }
        return Ok(());
    } else {
        args.songs.clone()
    };

    let analyzer = Analyzer::for_language(args.language);

    // Documents are independent: a bad file is reported and skipped, the
    // rest of the selection still runs.
    for name in &selected {
        match corpus.load(category, name) {
            Ok(document) => {
                let start = Instant::now();
                let analysis = analyzer.analyze(&document.content);
                let elapsed = start.elapsed();

                if args.json {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                } else {
                    print_report(name, &analysis, display_top(args.top));
                    println!("\n  analyzed in {elapsed:?}");
                }
            }
            Err(err) => {
                error!(song = name.as_str(), %err, "skipping song");
                eprintln!("error: {name}: {err}");
            }
        }
    }

    Ok(())
}

/// Reports rank at most `DISTRIBUTION_SIZE` words, so larger requests
/// clamp instead of silently printing a shorter list than asked for.
fn display_top(requested: usize) -> usize {
    requested.min(DISTRIBUTION_SIZE)
}

fn print_report(name: &str, analysis: &Analysis, top: usize) {
    println!();
    println!("=== {name} ===");
    println!("Total words:          {}", analysis.total_tokens);
    println!(
        "Average per sentence: {:.2}",
        analysis.avg_tokens_per_sentence
    );
    println!("Unique words:         {}", analysis.unique_tokens);

    println!();
    println!("Top {top} words:");
    for (word, count) in analysis.distribution.iter().take(top) {
        println!("  {word}: {count}");
    }

    println!();
    println!("Vocabulary distribution:");
    print_chart(&analysis.distribution);

    for summary in &analysis.top_ngrams {
        println!();
        println!("Top {}-grams:", summary.n);
        if summary.top.is_empty() {
            println!("  (none)");
        }
        for (gram, count) in &summary.top {
            println!("  {gram}: {count}");
        }
    }
}

// Terminal stand-in for the distribution bar chart.
fn print_chart(distribution: &[(String, usize)]) {
    const BAR_WIDTH: usize = 40;

    let max = distribution.first().map(|(_, count)| *count).unwrap_or(0);
    let label_width = distribution
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    for (word, count) in distribution {
        let bar_len = if max == 0 { 0 } else { (count * BAR_WIDTH / max).max(1) };
        let bar: String = "#".repeat(bar_len);
        println!("  {word:<label_width$} {count:>4} {bar}");
    }
}
