use scour::{clean_book, CleanConfig};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

/// A missing source file aborts the book with an error naming its path.
#[tokio::test]
async fn test_missing_book_error_names_path() {
    let fixture = TestFixture::new();

    let err = clean_book(&fixture.library(), "absent", &CleanConfig::default())
        .await
        .expect_err("Cleaning a missing book should fail");

    let message = format!("{err:#}");
    assert!(message.contains("orig_books"), "error should name the source dir: {message}");
    assert!(message.contains("absent.txt"), "error should name the file: {message}");
    assert!(!fixture.clean_book_exists("absent"), "no output should be written");
}

/// An empty source produces an empty corpus, not an error.
#[tokio::test]
async fn test_empty_book_produces_empty_corpus() {
    let fixture = TestFixture::new();
    fixture.create_orig_book("empty", "");

    let stats = clean_book(&fixture.library(), "empty", &CleanConfig::default())
        .await
        .expect("Cleaning an empty book should succeed");

    assert_eq!(fixture.read_clean_book("empty").unwrap(), "");
    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.chars_written, 0);
    assert!(!stats.truncated);
}

/// A source that is all noise still writes an (empty) corpus.
#[tokio::test]
async fn test_noise_only_book() {
    let fixture = TestFixture::new();
    fixture.create_orig_book("noise", "*****\nChapter 1\n42\n3 of 10\nTHE END\n");

    let stats = clean_book(&fixture.library(), "noise", &CleanConfig::default())
        .await
        .expect("Cleaning should succeed");

    assert_eq!(fixture.read_clean_book("noise").unwrap(), "");
    assert_eq!(stats.lines_discarded, 5);
    assert_eq!(stats.lines_kept, 0);
    assert_eq!(stats.paragraphs, 0);
}

/// The books/ output directory is created on demand.
#[tokio::test]
async fn test_output_directory_created_on_demand() {
    let fixture = TestFixture::new();
    fixture.create_orig_book("book", "One line only.\n");
    assert!(!fixture.root_path.join("books").exists());

    clean_book(&fixture.library(), "book", &CleanConfig::default())
        .await
        .expect("Cleaning should succeed");

    assert!(fixture.clean_book_exists("book"));
    assert_eq!(fixture.read_clean_book("book").unwrap(), "One line only.\n\n");
}

/// Discovery over a root without orig_books/ fails with the path in the error.
#[tokio::test]
async fn test_discovery_missing_source_dir() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let library = scour::Library::new(temp_dir.path());

    let err = library
        .discover_books()
        .await
        .expect_err("Discovery without orig_books/ should fail");
    assert!(format!("{err:#}").contains("orig_books"));
}
