//! Term sets: compiled collections of match patterns

use crate::config::{CaseMode, ExtractorConfig};
use crate::error::ExtractorError;
use regex::{RegexBuilder, RegexSet, RegexSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Label used for term sets built from in-memory patterns
const INLINE_SOURCE: &str = "<inline>";

/// Compiled-size cap for a single pattern or the combined set
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled collection of patterns, any one of which may match
///
/// Patterns keep their source order for reproducibility, but matching does
/// not depend on it. An empty set never matches.
#[derive(Debug, Clone)]
pub struct TermSet {
    source: String,
    patterns: Vec<String>,
    case: CaseMode,
    set: Option<RegexSet>,
}

impl TermSet {
    /// A set with no patterns; stands in for an absent exclusion file
    pub fn empty() -> Self {
        Self {
            source: INLINE_SOURCE.to_string(),
            patterns: Vec::new(),
            case: CaseMode::default(),
            set: None,
        }
    }

    /// Load one pattern per line from a term-list file
    ///
    /// Only line terminators are stripped; leading, trailing and internal
    /// whitespace is part of the pattern. Blank lines are skipped. Every
    /// pattern is compiled here, so a bad line fails before any document
    /// is touched.
    pub fn load(
        path: impl AsRef<Path>,
        case: CaseMode,
        max_pattern_length: usize,
    ) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExtractorError::TermFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(path.display().to_string(), &contents, case, max_pattern_length)
    }

    /// Parse term-list text; `source` names it in error messages
    pub fn parse(
        source: impl Into<String>,
        contents: &str,
        case: CaseMode,
        max_pattern_length: usize,
    ) -> Result<Self, ExtractorError> {
        let source = source.into();
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        let mut patterns = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            compile_pattern(line, case, max_pattern_length).map_err(|message| {
                ExtractorError::Config {
                    path: source.clone(),
                    line: idx + 1,
                    message,
                }
            })?;
            patterns.push(line.to_string());
        }

        let set = build_set(&patterns, case, REGEX_SIZE_LIMIT).map_err(|message| {
            ExtractorError::TermSet {
                path: source.clone(),
                message,
            }
        })?;

        debug!("Loaded {} patterns from {}", patterns.len(), source);

        Ok(Self {
            source,
            patterns,
            case,
            set,
        })
    }

    /// Build a set from in-memory patterns, with the same rules as a file
    pub fn from_patterns<I, S>(patterns: I, case: CaseMode) -> Result<Self, ExtractorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let contents = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(INLINE_SOURCE, &contents, case, usize::MAX)
    }

    /// True iff at least one pattern matches somewhere in `text`
    pub fn matches_any(&self, text: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(text))
    }

    /// Patterns in source order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Where the patterns came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Case mode the patterns were compiled with
    pub fn case(&self) -> CaseMode {
        self.case
    }
}

impl Default for TermSet {
    fn default() -> Self {
        Self::empty()
    }
}

fn compile_pattern(line: &str, case: CaseMode, max_pattern_length: usize) -> Result<(), String> {
    if line.len() > max_pattern_length {
        return Err(format!(
            "pattern is {} bytes long (max: {})",
            line.len(),
            max_pattern_length
        ));
    }
    RegexBuilder::new(line)
        .case_insensitive(case.is_insensitive())
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn build_set(
    patterns: &[String],
    case: CaseMode,
    size_limit: usize,
) -> Result<Option<RegexSet>, String> {
    if patterns.is_empty() {
        return Ok(None);
    }
    RegexSetBuilder::new(patterns)
        .case_insensitive(case.is_insensitive())
        .size_limit(size_limit)
        .build()
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Locations of the four term-list files for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermPaths {
    /// Causal vocabulary (required)
    pub causal: PathBuf,
    /// Topic vocabulary (required)
    pub topic: PathBuf,
    /// Causal exclusions (optional)
    pub exclude_causal: Option<PathBuf>,
    /// Topic exclusions (optional)
    pub exclude_topic: Option<PathBuf>,
}

/// The four term sets of a run, loaded once and never modified
#[derive(Debug, Clone)]
pub struct TermSets {
    /// Causal vocabulary
    pub causal: TermSet,
    /// Topic vocabulary
    pub topic: TermSet,
    /// Sentences matching these are dropped even if otherwise qualifying
    pub exclude_causal: TermSet,
    /// Sentences matching these are dropped even if otherwise qualifying
    pub exclude_topic: TermSet,
}

impl TermSets {
    /// Inclusion sets only; both exclusion sets empty
    pub fn new(causal: TermSet, topic: TermSet) -> Self {
        Self {
            causal,
            topic,
            exclude_causal: TermSet::empty(),
            exclude_topic: TermSet::empty(),
        }
    }

    /// Set the causal exclusions
    pub fn with_exclude_causal(mut self, exclude_causal: TermSet) -> Self {
        self.exclude_causal = exclude_causal;
        self
    }

    /// Set the topic exclusions
    pub fn with_exclude_topic(mut self, exclude_topic: TermSet) -> Self {
        self.exclude_topic = exclude_topic;
        self
    }

    /// Load every term file named in `paths`
    ///
    /// Exclusion sets use the case mode of their inclusion family. An
    /// absent exclusion file yields an empty set.
    pub fn load(paths: &TermPaths, config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let max = config.max_pattern_length;
        let causal = TermSet::load(&paths.causal, config.causal_case, max)?;
        let topic = TermSet::load(&paths.topic, config.topic_case, max)?;
        let exclude_causal = match &paths.exclude_causal {
            Some(path) => TermSet::load(path, config.causal_case, max)?,
            None => TermSet::empty(),
        };
        let exclude_topic = match &paths.exclude_topic {
            Some(path) => TermSet::load(path, config.topic_case, max)?,
            None => TermSet::empty(),
        };

        Ok(Self {
            causal,
            topic,
            exclude_causal,
            exclude_topic,
        })
    }
}
