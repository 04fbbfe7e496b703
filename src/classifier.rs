// Line classification predicates for noise removal.
// Every predicate operates on the stripped line and is independent of the others.

use std::collections::HashSet;

/// Decides, per stripped line, whether it is non-prose noise to discard.
///
/// The stop-list is the only per-document state; the remaining rules are
/// fixed. Parse failures inside the predicates mean "not a match", never an
/// error.
pub struct LineClassifier {
    stop_list: HashSet<String>,
}

impl LineClassifier {
    /// Create a classifier with the given exact-match stop-list entries.
    pub fn new<I>(stop_list: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            stop_list: stop_list.into_iter().collect(),
        }
    }

    /// Returns whether the stripped line should be discarded.
    pub fn should_discard(&self, text: &str) -> bool {
        if self.stop_list.contains(text) {
            return true;
        }
        is_chapter_title(text) || is_page_number(text) || has_script_marker(text)
    }
}

/// Chapter heading: a literal "Chapter"/"CHAPTER" prefix, or a Roman-numeral
/// title like "XII. THE RETURN".
pub fn is_chapter_title(text: &str) -> bool {
    text.starts_with("Chapter") || text.starts_with("CHAPTER") || is_numeric_chapter_title(text)
}

/// Roman-numeral chapter title: exactly one '.' in the line, and every
/// character before it drawn from {I, V, X}. An empty prefix passes
/// vacuously, so a leading-period line is treated as a title too.
fn is_numeric_chapter_title(text: &str) -> bool {
    let mut parts = text.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(_), None) => prefix.chars().all(|c| matches!(c, 'I' | 'V' | 'X')),
        _ => false,
    }
}

/// Page number: the whole line parses as an integer, or it is the
/// three-token form "<int> of <int>".
pub fn is_page_number(text: &str) -> bool {
    is_integer(text) || is_of_style_page_number(text)
}

fn is_integer(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

fn is_of_style_page_number(text: &str) -> bool {
    // Split on single spaces: "3  of 10" yields an empty token and fails the
    // three-token requirement.
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() != 3 {
        return false;
    }
    is_integer(tokens[0]) && tokens[1] == "of" && is_integer(tokens[2])
}

/// Mis-decoded script marker: the second space-delimited token starts with
/// code point 229 or 230. Only the second token is inspected; this is a
/// compatibility heuristic for specific corrupted sources, not script
/// detection.
fn has_script_marker(text: &str) -> bool {
    let mut tokens = text.split(' ');
    tokens.next();
    match tokens.next() {
        Some(second) => second
            .chars()
            .next()
            .is_some_and(|c| c as u32 == 229 || c as u32 == 230),
        None => false,
    }
}
