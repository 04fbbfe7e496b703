// Library layout and book discovery.
//
// A library root holds raw sources under `orig_books/` and cleaned corpora
// under `books/`; a book name is the file stem shared by both sides.

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory of raw book sources under the library root.
pub const SOURCE_DIR: &str = "orig_books";

/// Directory of cleaned corpora under the library root.
pub const CLEAN_DIR: &str = "books";

/// On-disk layout of a book library.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/orig_books`
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// `<root>/books`
    pub fn clean_dir(&self) -> PathBuf {
        self.root.join(CLEAN_DIR)
    }

    /// `<root>/orig_books/<name>.txt`
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_dir().join(format!("{name}.txt"))
    }

    /// `<root>/books/<name>.txt`
    pub fn clean_path(&self, name: &str) -> PathBuf {
        self.clean_dir().join(format!("{name}.txt"))
    }

    /// Discover book names: the stems of `*.txt` files directly under
    /// `orig_books/`, sorted. Matches that are not regular files are
    /// skipped with a warning.
    pub async fn discover_books(&self) -> Result<Vec<String>> {
        let source_dir = self.source_dir();
        if !source_dir.is_dir() {
            anyhow::bail!("Source directory does not exist: {}", source_dir.display());
        }

        let pattern = format!("{}/*.txt", source_dir.display());
        debug!("Starting book discovery with pattern: {}", pattern);

        let mut names = Vec::new();
        let paths =
            glob(&pattern).with_context(|| format!("Invalid discovery pattern: {pattern}"))?;

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            let metadata = tokio::fs::metadata(&path)
                .await
                .with_context(|| format!("Cannot access file: {}", path.display()))?;
            if !metadata.is_file() {
                warn!("Skipping non-file match: {}", path.display());
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                debug!("Found book: {}", stem);
                names.push(stem.to_string());
            }
        }

        names.sort();
        info!("Discovered {} books in {}", names.len(), source_dir.display());
        Ok(names)
    }

    /// Write a cleaned corpus verbatim to `<root>/books/<name>.txt`,
    /// creating the output directory on demand. No trailing-newline
    /// normalization beyond what assembly produced.
    pub async fn write_clean(&self, name: &str, corpus: &str) -> Result<PathBuf> {
        let clean_dir = self.clean_dir();
        tokio::fs::create_dir_all(&clean_dir)
            .await
            .with_context(|| format!("Failed to create output directory: {}", clean_dir.display()))?;

        let path = self.clean_path(name);
        tokio::fs::write(&path, corpus)
            .await
            .with_context(|| format!("Failed to write cleaned book: {}", path.display()))?;

        Ok(path)
    }
}
