//! Observation module - the unit of output

/// One extracted observation: a core sentence and its context window.
///
/// Observations are immutable once built. Overlapping windows from nearby
/// matches are kept as separate observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    filename: String,
    full_observation: String,
    core_sentence: String,
}

impl Observation {
    /// Create a new observation
    pub fn new(
        filename: impl Into<String>,
        full_observation: impl Into<String>,
        core_sentence: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            full_observation: full_observation.into(),
            core_sentence: core_sentence.into(),
        }
    }

    /// Name of the document the observation came from
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The context window around the core sentence
    pub fn full_observation(&self) -> &str {
        &self.full_observation
    }

    /// The sentence that satisfied the match rule
    pub fn core_sentence(&self) -> &str {
        &self.core_sentence
    }

    /// Fields in output column order: filename, full observation, core sentence
    pub fn fields(&self) -> [&str; 3] {
        [&self.filename, &self.full_observation, &self.core_sentence]
    }
}
