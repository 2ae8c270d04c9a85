//! Sentence module - one piece of a segmented document

use std::fmt;
use std::ops::Range;

/// The delimiter sentences are split on: a period followed by a single space.
pub const SENTENCE_DELIMITER: &str = ". ";

/// A contiguous, non-empty piece of a document's text.
///
/// The delimiter that ended the piece is not part of `text`; `terminated`
/// records whether one was consumed. `start` is the byte offset of `text`
/// in the document, so windows can be cut straight from the source text.
///
/// # Examples
///
/// ```
/// use proxsearch_domain::Sentence;
///
/// let sentence = Sentence::new(0, 0, "The flood caused damage", true);
/// assert_eq!(sentence.to_string(), "The flood caused damage.");
/// assert_eq!(sentence.span(), 0..23);
///
/// let last = Sentence::new(1, 25, "Markets reacted.", false);
/// assert_eq!(last.to_string(), "Markets reacted.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position in the document's sentence sequence (0-based)
    pub index: usize,

    /// Byte offset of the piece in the document text
    pub start: usize,

    /// The piece of text, without the consumed delimiter
    pub text: &'a str,

    /// Whether a delimiter followed this piece in the source text
    pub terminated: bool,
}

impl<'a> Sentence<'a> {
    /// Create a new sentence
    pub fn new(index: usize, start: usize, text: &'a str, terminated: bool) -> Self {
        Self {
            index,
            start,
            text,
            terminated,
        }
    }

    /// Byte range of the piece in the document text
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Renders the sentence as it reads in the document, with the consumed
/// period restored.
impl fmt::Display for Sentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)?;
        if self.terminated {
            f.write_str(".")?;
        }
        Ok(())
    }
}
