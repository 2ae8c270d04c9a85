//! Observation matching: causal AND topic AND NOT exclusions

use crate::terms::TermSets;
use proxsearch_domain::Sentence;

/// Whether `text` satisfies the match rule
///
/// The text must match some causal pattern and some topic pattern, and
/// must match no pattern in either exclusion set. Exclusion always wins
/// over inclusion.
pub fn is_match(text: &str, terms: &TermSets) -> bool {
    terms.causal.matches_any(text)
        && terms.topic.matches_any(text)
        && !terms.exclude_causal.matches_any(text)
        && !terms.exclude_topic.matches_any(text)
}

/// Indices of every sentence satisfying the match rule, ascending
///
/// Each qualifying sentence is reported once, even when another sentence
/// has identical text.
pub fn find_matches(sentences: &[Sentence<'_>], terms: &TermSets) -> Vec<usize> {
    sentences
        .iter()
        .filter(|sentence| is_match(sentence.text, terms))
        .map(|sentence| sentence.index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaseMode;
    use crate::segmenter::segment;
    use crate::terms::TermSet;

    fn set(patterns: &[&str]) -> TermSet {
        TermSet::from_patterns(patterns, CaseMode::Sensitive).unwrap()
    }

    fn terms() -> TermSets {
        TermSets::new(set(&["flood", "drought"]), set(&["damage", "yield"]))
    }

    #[test]
    fn test_requires_both_inclusion_sets() {
        let terms = terms();
        assert!(is_match("the flood caused damage", &terms));
        assert!(!is_match("the flood receded", &terms));
        assert!(!is_match("damage was assessed", &terms));
    }

    #[test]
    fn test_inclusion_with_empty_exclusions_is_reported() {
        let sentences = segment("the flood caused damage. nothing else");
        assert_eq!(find_matches(&sentences, &terms()), vec![0]);
    }

    #[test]
    fn test_exclude_topic_overrides_inclusion() {
        let terms = terms().with_exclude_topic(set(&["damage"]));
        assert!(!is_match("the flood caused damage", &terms));
        assert!(is_match("the drought cut the yield", &terms));
    }

    #[test]
    fn test_exclude_causal_overrides_inclusion() {
        let terms = terms().with_exclude_causal(set(&["flood"]));
        assert!(!is_match("the flood caused damage and the drought hurt yield", &terms));
    }

    #[test]
    fn test_duplicate_sentences_each_reported_once() {
        let sentences = segment("flood damage. calm. flood damage. flood damage");
        assert_eq!(find_matches(&sentences, &terms()), vec![0, 2, 3]);
    }

    #[test]
    fn test_no_sentences() {
        assert!(find_matches(&[], &terms()).is_empty());
    }
}
