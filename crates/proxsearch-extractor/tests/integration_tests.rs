//! Integration tests for proxsearch-extractor
//!
//! These tests exercise term-file loading and document discovery on a real
//! file system.

use proxsearch_extractor::{
    CaseMode, DocumentSource, Engine, ExtractorConfig, ExtractorError, MockExtractor, TermPaths,
    TermSets,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn term_paths(dir: &Path) -> TermPaths {
    TermPaths {
        causal: write_file(dir, "causal.txt", "flood\ndrought\n"),
        topic: write_file(dir, "topic.txt", "damage\nyield\n"),
        exclude_causal: None,
        exclude_topic: None,
    }
}

#[test]
fn test_load_term_sets() {
    let dir = TempDir::new().unwrap();
    let paths = term_paths(dir.path());

    let terms = TermSets::load(&paths, &ExtractorConfig::default()).unwrap();
    assert_eq!(terms.causal.len(), 2);
    assert_eq!(terms.topic.len(), 2);
    assert!(terms.exclude_causal.is_empty());
    assert!(terms.exclude_topic.is_empty());
}

#[test]
fn test_exclusion_sets_follow_family_case_mode() {
    let dir = TempDir::new().unwrap();
    let mut paths = term_paths(dir.path());
    paths.exclude_topic = Some(write_file(dir.path(), "xt.txt", "insurance\n"));
    paths.exclude_causal = Some(write_file(dir.path(), "xc.txt", "rain\n"));

    let config = ExtractorConfig {
        topic_case: CaseMode::Insensitive,
        ..ExtractorConfig::default()
    };
    let terms = TermSets::load(&paths, &config).unwrap();

    assert_eq!(terms.exclude_topic.case(), CaseMode::Insensitive);
    assert_eq!(terms.exclude_causal.case(), CaseMode::Sensitive);
    assert!(terms.exclude_topic.matches_any("Insurance claims"));
    assert!(!terms.exclude_causal.matches_any("Rain fell"));
}

#[test]
fn test_missing_required_term_file() {
    let dir = TempDir::new().unwrap();
    let mut paths = term_paths(dir.path());
    paths.topic = dir.path().join("does-not-exist.txt");

    let err = TermSets::load(&paths, &ExtractorConfig::default()).unwrap_err();
    match err {
        ExtractorError::TermFile { path, .. } => assert!(path.ends_with("does-not-exist.txt")),
        other => panic!("Expected TermFile error, got {:?}", other),
    }
}

#[test]
fn test_bad_pattern_in_exclusion_file() {
    let dir = TempDir::new().unwrap();
    let mut paths = term_paths(dir.path());
    paths.exclude_causal = Some(write_file(dir.path(), "xc.txt", "fine\n\n[unclosed\n"));

    let err = TermSets::load(&paths, &ExtractorConfig::default()).unwrap_err();
    match err {
        ExtractorError::Config { path, line, .. } => {
            assert!(path.ends_with("xc.txt"));
            assert_eq!(line, 3);
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_document_source_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "b.pdf", "");
    write_file(dir.path(), "C.PDF", "");
    write_file(dir.path(), "notes.txt", "");
    write_file(dir.path(), "a.pdf", "");
    fs::create_dir(dir.path().join("nested.pdf")).unwrap();

    let source = DocumentSource::scan(dir.path(), &ExtractorConfig::default()).unwrap();

    let names: Vec<&str> = source
        .documents()
        .iter()
        .map(|d| d.filename.as_str())
        .collect();
    assert_eq!(names, vec!["C.PDF", "a.pdf", "b.pdf"]);
    assert_eq!(source.ignored(), &["nested.pdf".to_string(), "notes.txt".to_string()]);
}

#[test]
fn test_document_source_custom_extensions() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.pdf", "");
    write_file(dir.path(), "b.txt", "");

    let config = ExtractorConfig {
        document_extensions: vec!["txt".to_string()],
        ..ExtractorConfig::default()
    };
    let source = DocumentSource::scan(dir.path(), &config).unwrap();
    assert_eq!(source.len(), 1);
    assert_eq!(source.documents()[0].filename, "b.txt");
}

#[test]
fn test_scan_directory_end_to_end() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    write_file(&docs, "a.pdf", "");
    write_file(&docs, "b.pdf", "");

    let terms = TermSets::load(&term_paths(dir.path()), &ExtractorConfig::default()).unwrap();
    let engine = Engine::new(terms, ExtractorConfig::default());

    let mut extractor = MockExtractor::new();
    extractor.add_text("a.pdf", "The flood caused damage. Calm.");
    extractor.add_text("b.pdf", "A drought cut the yield");

    let source = DocumentSource::scan(&docs, engine.config()).unwrap();
    let observations = engine.collect(source.documents(), &extractor).unwrap();

    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].filename(), "a.pdf");
    assert_eq!(observations[0].full_observation(), "The flood caused damage. Calm.");
    assert_eq!(observations[1].filename(), "b.pdf");
    assert_eq!(observations[1].core_sentence(), "A drought cut the yield");
}
