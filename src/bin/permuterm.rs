// Permuterm CLI Tool
// Indexes plain-text files and runs wildcard queries against them

use std::path::PathBuf;

use clap::Parser;
use permuterm::{Corpus, PatternError, PermutermIndex, SearchResult};
use tracing_subscriber::EnvFilter;

/// Permuterm Search Tool - Wildcard term search over text documents
#[derive(Parser, Debug)]
#[command(name = "permuterm")]
#[command(about = "Index text files and search them with wildcard patterns", long_about = None)]
#[command(version)]
struct Args {
    /// Plain-text documents to index (ids assigned from 1 in argument order)
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Search pattern, repeatable
    /// - No wildcard: exact word (e.g., "apple")
    /// - "app*", "*ple", "a*le": prefix, suffix, infix
    /// - "*ppl*": substring
    #[arg(short, long = "query", value_name = "PATTERN")]
    queries: Vec<String>,

    /// Maximum number of results to display per query
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print the posting list of every term, sorted by term
    #[arg(short, long)]
    postings: bool,

    /// Show detailed information (also raises the default log level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut corpus = Corpus::new()?;
    let mut index = PermutermIndex::new();

    for path in &args.files {
        corpus.add_file(path, &mut index)?;
    }

    println!("Uploaded documents:");
    for doc in corpus.documents() {
        println!("  Document {}: {} ({} tokens)", doc.id, doc.name, doc.tokens);
    }

    if args.verbose {
        let stats = index.stats();
        println!(
            "Index built: {} words, {} postings, {} rotations in {} trie nodes",
            stats.words, stats.postings, stats.rotations, stats.trie_nodes
        );
    }
    println!();

    // A rejected pattern is reported and does not stop the remaining queries
    for pattern in &args.queries {
        match render_query(&index, pattern, args.limit) {
            Ok(block) => println!("{}", block),
            Err(err) => eprintln!("  {}", err),
        }
    }

    if args.postings {
        println!("Posting list (sorted by term):");
        for entry in index.posting_report() {
            println!("  {}", entry);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag
fn init_tracing(verbose: bool) {
    let default = if verbose { "permuterm=debug" } else { "permuterm=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Output block for one query: header plus numbered result lines
fn render_query(
    index: &PermutermIndex,
    pattern: &str,
    limit: Option<usize>,
) -> Result<String, PatternError> {
    let results = match limit {
        Some(limit) => index.search_limit(pattern, limit)?,
        None => index.search(pattern)?,
    };

    let mut block = format!("Query: {}\n", pattern);
    if results.is_empty() {
        block.push_str("  No matches found.\n");
        return Ok(block);
    }

    block.push_str(&format!("  Found {} matches:\n", results.len()));
    for (idx, result) in results.iter().enumerate() {
        block.push_str(&format!("  {}. {}\n", idx + 1, format_result(result)));
    }
    Ok(block)
}

/// One result line: word, term frequency and grouped occurrences
fn format_result(result: &SearchResult) -> String {
    format!(
        "{:<15} ({}) → {}",
        result.word,
        result.postings.len(),
        result.postings
    )
}
