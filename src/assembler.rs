// Corpus assembly: one forward pass over the source lines.

use crate::classifier::LineClassifier;

/// Characters that terminate a sentence and therefore a paragraph.
const SENTENCE_END_CHARS: [char; 4] = ['"', '.', '!', '?'];

/// Result of an assembly pass: the corpus plus per-pass counters.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The cleaned corpus, paragraphs separated by blank lines.
    pub corpus: String,
    /// Lines whose stripped text was appended to the corpus.
    pub lines_kept: u64,
    /// Lines the classifier discarded.
    pub lines_discarded: u64,
    /// Paragraph breaks inserted.
    pub paragraph_breaks: u64,
    /// Whether the length limit halted the pass before the input ran out.
    pub truncated: bool,
}

/// Returns whether the stripped line ends a sentence.
pub fn ends_sentence(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| SENTENCE_END_CHARS.contains(&c))
}

/// Assemble the corpus from raw source lines (newline already stripped by
/// the reader, so a bare-newline source line arrives as `""`).
///
/// Per line: halt if the accumulated character count already exceeds
/// `length_limit` (strict greater-than, so the crossing line completes and
/// the output may modestly overrun the limit); skip accumulation for
/// discarded lines; otherwise append the stripped text plus one space.
/// A sentence-ending stripped line then converts the pending trailing space
/// into a paragraph break; this runs for discarded lines too, so a
/// discarded heading ending in '.' still breaks the paragraph.
pub fn assemble_corpus(
    lines: &[String],
    classifier: &LineClassifier,
    length_limit: usize,
) -> Assembly {
    let mut corpus = String::new();
    // Character count tracked incrementally; corpus.chars().count() per line
    // would make the pass quadratic.
    let mut corpus_chars = 0usize;
    let mut lines_kept = 0u64;
    let mut lines_discarded = 0u64;
    let mut paragraph_breaks = 0u64;
    let mut truncated = false;

    for raw in lines {
        if corpus_chars > length_limit {
            truncated = true;
            break;
        }

        let text = raw.trim();
        if classifier.should_discard(text) {
            lines_discarded += 1;
        } else if !raw.is_empty() {
            corpus.push_str(text);
            corpus.push(' ');
            corpus_chars += text.chars().count() + 1;
            lines_kept += 1;
        }

        if ends_sentence(text) {
            if corpus.ends_with(' ') {
                corpus.pop();
                corpus_chars -= 1;
            }
            corpus.push_str("\n\n");
            corpus_chars += 2;
            paragraph_breaks += 1;
        }
    }

    Assembly {
        corpus,
        lines_kept,
        lines_discarded,
        paragraph_breaks,
        truncated,
    }
}
