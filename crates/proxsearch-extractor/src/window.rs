//! Context windows around matched sentences

use proxsearch_domain::Sentence;
use std::ops::RangeInclusive;

/// Sentence indices covered by the window around `matched_index`
///
/// The range is clamped to the document, not padded: a match near either
/// end gets a shorter window. `len` must be greater than `matched_index`.
pub fn window_bounds(len: usize, matched_index: usize, radius: usize) -> RangeInclusive<usize> {
    let start = matched_index.saturating_sub(radius);
    let end = matched_index.saturating_add(radius).min(len.saturating_sub(1));
    start..=end
}

/// Text of the window around `matched_index`
///
/// The window is cut from `text`, the document the sentences were segmented
/// from, running from the first sentence in range through the last one and
/// the period consumed after it. Delimiter runs between the sentences, such
/// as ellipses, are kept as they appear in the document.
///
/// # Panics
///
/// Panics if `matched_index` is not a valid index into `sentences`, or if
/// the sentences do not come from `text`.
pub fn build_window(
    text: &str,
    sentences: &[Sentence<'_>],
    matched_index: usize,
    radius: usize,
) -> String {
    assert!(
        matched_index < sentences.len(),
        "matched index {} out of bounds for {} sentences",
        matched_index,
        sentences.len()
    );

    let bounds = window_bounds(sentences.len(), matched_index, radius);
    let first = &sentences[*bounds.start()];
    let last = &sentences[*bounds.end()];
    let mut end = last.span().end;
    if last.terminated {
        end += 1;
    }
    text[first.start..end].to_string()
}
