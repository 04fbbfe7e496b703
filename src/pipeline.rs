// Per-book cleaning pipeline: read, classify and assemble, write, report.

use anyhow::Result;
use tracing::info;

use crate::assembler::assemble_corpus;
use crate::classifier::LineClassifier;
use crate::config::CleanConfig;
use crate::library::Library;
use crate::reader::{AsyncLineReader, ReaderConfig};
use crate::stats::BookStats;

/// Clean one book: read `orig_books/<name>.txt`, assemble the corpus, and
/// write it to `books/<name>.txt`. I/O failures are fatal for the book; the
/// caller decides whether the batch continues.
pub async fn clean_book(library: &Library, name: &str, config: &CleanConfig) -> Result<BookStats> {
    let start_time = std::time::Instant::now();

    let reader = AsyncLineReader::new(ReaderConfig::default());
    let (lines, read_stats) = reader.read_lines(library.source_path(name)).await?;

    let classifier = LineClassifier::new(config.stop_list.iter().cloned());
    let assembly = assemble_corpus(&lines, &classifier, config.length_limit);
    let chars_written = assembly.corpus.chars().count() as u64;

    let out_path = library.write_clean(name, &assembly.corpus).await?;

    let stats = BookStats {
        name: name.to_string(),
        lines_read: read_stats.lines_read,
        lines_kept: assembly.lines_kept,
        lines_discarded: assembly.lines_discarded,
        paragraphs: assembly.paragraph_breaks,
        chars_written,
        truncated: assembly.truncated,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
        status: "cleaned".to_string(),
        error: None,
    };

    info!(
        "Cleaned {} -> {}: {} lines in, {} discarded, {} paragraphs, {} chars{}",
        name,
        out_path.display(),
        stats.lines_read,
        stats.lines_discarded,
        stats.paragraphs,
        stats.chars_written,
        if stats.truncated { " (truncated at length limit)" } else { "" }
    );

    Ok(stats)
}
