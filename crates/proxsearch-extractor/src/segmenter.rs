//! Sentence segmentation on the literal ". " delimiter
//!
//! This is a heuristic, not grammatical sentence detection: abbreviations
//! such as "e.g. foo" are split, and decimals are not treated specially.
//! Runs of back-to-back delimiters, as in ". . ." ellipses, produce no
//! sentences of their own.

use proxsearch_domain::{Sentence, SENTENCE_DELIMITER};

/// Split `text` into sentences on every ". " occurrence
///
/// The delimiter is consumed. Pieces are kept verbatim, except that empty
/// pieces (between back-to-back delimiters, or before a leading or after a
/// trailing delimiter) are dropped and take no index. Each sentence records
/// its byte offset in `text`. Empty input yields no sentences.
pub fn segment(text: &str) -> Vec<Sentence<'_>> {
    let mut pieces = text.split(SENTENCE_DELIMITER).peekable();
    let mut sentences = Vec::new();
    let mut offset = 0;
    while let Some(piece) = pieces.next() {
        let terminated = pieces.peek().is_some();
        if !piece.is_empty() {
            sentences.push(Sentence::new(sentences.len(), offset, piece, terminated));
        }
        offset += piece.len() + SENTENCE_DELIMITER.len();
    }
    sentences
}

/// Join sentence pieces back together with the delimiter
///
/// For text without empty pieces this reproduces the text exactly; a run of
/// back-to-back delimiters comes back as a single delimiter, and a leading
/// or trailing delimiter is lost.
pub fn rejoin(sentences: &[Sentence<'_>]) -> String {
    sentences
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER)
}
