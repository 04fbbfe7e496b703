// Integration test utilities shared across test binaries.

use scour::Library;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture building a temporary library root with an orig_books/
/// directory, mirroring the layout the CLI operates on.
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with an empty orig_books/ directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        fs::create_dir_all(root_path.join("orig_books"))
            .expect("Failed to create orig_books directory");

        Self { temp_dir, root_path }
    }

    /// Library over the fixture root.
    pub fn library(&self) -> Library {
        Library::new(&self.root_path)
    }

    /// Write a raw book source under orig_books/.
    pub fn create_orig_book(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root_path.join("orig_books").join(format!("{name}.txt"));
        fs::write(&path, content).expect("Failed to write book source");
        path
    }

    /// Read the cleaned corpus for a book, if written.
    pub fn read_clean_book(&self, name: &str) -> Result<String, std::io::Error> {
        fs::read_to_string(self.root_path.join("books").join(format!("{name}.txt")))
    }

    /// Check whether a cleaned corpus exists for a book.
    pub fn clean_book_exists(&self, name: &str) -> bool {
        self.root_path
            .join("books")
            .join(format!("{name}.txt"))
            .exists()
    }
}
