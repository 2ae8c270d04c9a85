//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Whether term patterns distinguish letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Patterns match letter case exactly
    Sensitive,
    /// Patterns ignore letter case
    Insensitive,
}

impl Default for CaseMode {
    fn default() -> Self {
        CaseMode::Sensitive
    }
}

impl CaseMode {
    /// `Insensitive` when `ignore_case` is set, else `Sensitive`
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }

    /// Whether this mode ignores case
    pub fn is_insensitive(self) -> bool {
        self == CaseMode::Insensitive
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sentences included on each side of a core sentence
    pub window_radius: usize,

    /// Case mode for the causal and exclude-causal term sets
    pub causal_case: CaseMode,

    /// Case mode for the topic and exclude-topic term sets
    pub topic_case: CaseMode,

    /// File extensions treated as documents, without the leading dot
    pub document_extensions: Vec<String>,

    /// Longest accepted term-list line (bytes)
    pub max_pattern_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.document_extensions.is_empty() {
            return Err("document_extensions must not be empty".to_string());
        }
        for ext in &self.document_extensions {
            if ext.is_empty() {
                return Err("document_extensions must not contain an empty extension".to_string());
            }
            if ext.starts_with('.') {
                return Err(format!(
                    "document extension '{}' must be given without the leading dot",
                    ext
                ));
            }
        }
        if self.max_pattern_length == 0 {
            return Err("max_pattern_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Whether `extension` names a document file (ASCII case-insensitive)
    pub fn is_document_extension(&self, extension: &str) -> bool {
        self.document_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window_radius: 2,
            causal_case: CaseMode::Sensitive,
            topic_case: CaseMode::Sensitive,
            document_extensions: vec!["pdf".to_string()],
            max_pattern_length: 1000,
        }
    }
}
