// Async buffered line reading for book sources.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for a single file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async file reader that collects file contents line-by-line. Newlines are
/// stripped, so a bare-newline source line arrives as the empty string.
/// Open and decode failures are fatal and name the offending path.
pub struct AsyncLineReader {
    config: ReaderConfig,
}

impl AsyncLineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read all lines of a file with async buffered I/O.
    pub async fn read_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open book file: {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut result_lines = Vec::new();
        let mut byte_count = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("Failed to decode book file: {}", path.display()))?
        {
            byte_count += line.len() as u64 + 1; // +1 for newline
            result_lines.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: result_lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );

        Ok((result_lines, stats))
    }
}

/// Convenience function for reading a single file with default configuration.
pub async fn read_lines_async<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let reader = AsyncLineReader::new(ReaderConfig::default());
    let (lines, _stats) = reader.read_lines(file_path).await?;
    Ok(lines)
}
