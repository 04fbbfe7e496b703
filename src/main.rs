use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{info, warn};

use scour::{clean_book, load_stop_list, write_run_stats, BookStats, CleanConfig, Library, RunStats};

#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(about = "Corpus cleaner for public-domain book texts")]
#[command(version)]
struct Args {
    /// Book names to clean (file stems under orig_books/)
    names: Vec<String>,

    /// Library root containing orig_books/ and books/
    #[arg(long, default_value = "..")]
    library_root: PathBuf,

    /// Clean every book found under orig_books/
    #[arg(long)]
    all: bool,

    /// Maximum corpus length in characters before cleaning stops
    #[arg(long, default_value_t = scour::DEFAULT_LENGTH_LIMIT)]
    length_limit: usize,

    /// File with one boilerplate line per line, replacing the built-in stop-list
    #[arg(long)]
    stop_list: Option<PathBuf>,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting scour");
    info!(?args, "Parsed CLI arguments");

    if !args.library_root.exists() {
        anyhow::bail!(
            "Library root does not exist: {}",
            args.library_root.display()
        );
    }

    let library = Library::new(&args.library_root);
    if !library.source_dir().is_dir() {
        anyhow::bail!(
            "Source directory does not exist: {}",
            library.source_dir().display()
        );
    }

    let names = if args.all {
        library.discover_books().await?
    } else {
        args.names.clone()
    };

    if names.is_empty() {
        anyhow::bail!("No books to clean: pass book names or use --all");
    }

    let mut config = CleanConfig {
        length_limit: args.length_limit,
        ..CleanConfig::default()
    };
    if let Some(ref stop_list_path) = args.stop_list {
        config = config.with_stop_list(load_stop_list(stop_list_path).await?);
        info!(
            "Loaded {} stop-list entries from {}",
            config.stop_list.len(),
            stop_list_path.display()
        );
    }

    info!("Cleaning {} books under {}", names.len(), args.library_root.display());

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(names.len() as u64)
    };
    progress.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let run_start = std::time::Instant::now();
    let mut book_stats = Vec::with_capacity(names.len());

    for name in &names {
        progress.set_message(name.clone());

        match clean_book(&library, name, &config).await {
            Ok(stats) => {
                book_stats.push(stats);
            }
            Err(e) => {
                if args.fail_fast {
                    progress.finish_and_clear();
                    return Err(e.context(format!("Failed to clean book: {name}")));
                }
                warn!("Failed to clean {} (continuing): {:#}", name, e);
                book_stats.push(BookStats::failed(name, &format!("{e:#}")));
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    let run_stats = RunStats::new(book_stats, run_start.elapsed().as_millis() as u64);
    write_run_stats(&args.stats_out, &run_stats).await?;

    println!("scour v{} - cleaning complete", env!("CARGO_PKG_VERSION"));
    println!(
        "  Cleaned: {} of {} books",
        run_stats.books_cleaned, run_stats.books_total
    );
    println!("  Total characters written: {}", run_stats.total_chars_written);
    for book in run_stats.books.iter().filter(|b| b.truncated) {
        println!("  {} truncated at the length limit", book.name);
    }
    println!("  Stats written to: {}", args.stats_out.display());

    if run_stats.books_failed > 0 {
        for book in run_stats.books.iter().filter(|b| b.error.is_some()) {
            println!(
                "  Failed: {} ({})",
                book.name,
                book.error.as_deref().unwrap_or("unknown error")
            );
        }
        anyhow::bail!("{} of {} books failed", run_stats.books_failed, run_stats.books_total);
    }

    Ok(())
}
