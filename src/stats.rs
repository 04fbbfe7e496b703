// Run statistics collection and JSON output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-book cleaning statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookStats {
    /// Book name (file stem under orig_books/)
    pub name: String,
    /// Source lines read
    pub lines_read: u64,
    /// Lines whose text survived into the corpus
    pub lines_kept: u64,
    /// Lines discarded by the classifier
    pub lines_discarded: u64,
    /// Paragraph breaks inserted
    pub paragraphs: u64,
    /// Characters written to the cleaned corpus
    pub chars_written: u64,
    /// Whether the length limit halted the pass early
    pub truncated: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (cleaned, failed)
    pub status: String,
    /// Error message if cleaning failed
    pub error: Option<String>,
}

impl BookStats {
    /// Stats record for a book that failed before producing output.
    pub fn failed(name: &str, error: &str) -> Self {
        Self {
            name: name.to_string(),
            lines_read: 0,
            lines_kept: 0,
            lines_discarded: 0,
            paragraphs: 0,
            chars_written: 0,
            truncated: false,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// Whole-run summary written to the stats output file
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    pub books_total: usize,
    pub books_cleaned: usize,
    pub books_failed: usize,
    pub total_chars_written: u64,
    pub total_time_ms: u64,
    pub books: Vec<BookStats>,
}

impl RunStats {
    pub fn new(books: Vec<BookStats>, total_time_ms: u64) -> Self {
        let books_cleaned = books.iter().filter(|b| b.error.is_none()).count();
        Self {
            books_total: books.len(),
            books_cleaned,
            books_failed: books.len() - books_cleaned,
            total_chars_written: books.iter().map(|b| b.chars_written).sum(),
            total_time_ms,
            books,
        }
    }
}

/// Write run statistics as pretty-printed JSON.
pub async fn write_run_stats<P: AsRef<Path>>(path: P, stats: &RunStats) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(stats).context("Failed to serialize run stats")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write stats file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book(name: &str, chars: u64) -> BookStats {
        BookStats {
            name: name.to_string(),
            lines_read: 100,
            lines_kept: 80,
            lines_discarded: 12,
            paragraphs: 30,
            chars_written: chars,
            truncated: false,
            processing_time_ms: 5,
            status: "cleaned".to_string(),
            error: None,
        }
    }

    #[test]
    fn test_run_stats_aggregation() {
        let books = vec![
            sample_book("a", 1000),
            sample_book("b", 2000),
            BookStats::failed("c", "missing file"),
        ];
        let stats = RunStats::new(books, 42);

        assert_eq!(stats.books_total, 3);
        assert_eq!(stats.books_cleaned, 2);
        assert_eq!(stats.books_failed, 1);
        assert_eq!(stats.total_chars_written, 3000);
        assert_eq!(stats.total_time_ms, 42);
    }

    #[tokio::test]
    async fn test_run_stats_json_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_stats.json");

        let stats = RunStats::new(vec![sample_book("a", 500)], 7);
        write_run_stats(&path, &stats).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: RunStats = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.books_total, 1);
        assert_eq!(parsed.books[0].name, "a");
        assert_eq!(parsed.books[0].chars_written, 500);
        assert_eq!(parsed.books[0].status, "cleaned");
    }
}
