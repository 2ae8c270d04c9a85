//! Document discovery in an input directory

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A document file queued for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// File name, used to label observations
    pub filename: String,

    /// Full path to the file
    pub path: PathBuf,
}

impl DocumentFile {
    /// Create a document entry from a path; the file name is taken from it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { filename, path }
    }
}

/// The documents found in a directory, in processing order
///
/// Only the top level of the directory is listed. Documents are ordered by
/// file name so repeated runs emit identical output.
#[derive(Debug, Clone, Default)]
pub struct DocumentSource {
    documents: Vec<DocumentFile>,
    ignored: Vec<String>,
}

impl DocumentSource {
    /// List `dir`, keeping regular files with a configured document extension
    pub fn scan(dir: impl AsRef<Path>, config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let dir = dir.as_ref();
        let to_error = |source| ExtractorError::DocumentSource {
            path: dir.display().to_string(),
            source,
        };

        let mut entries: Vec<(OsString, PathBuf)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(to_error)? {
            let entry = entry.map_err(to_error)?;
            entries.push((entry.file_name(), entry.path()));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut source = Self::default();
        for (name, path) in entries {
            let name = name.to_string_lossy().into_owned();
            let is_document = path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| config.is_document_extension(ext));

            if is_document {
                source.documents.push(DocumentFile {
                    filename: name,
                    path,
                });
            } else {
                info!("{} was not processed: not a regular document file", name);
                source.ignored.push(name);
            }
        }

        debug!(
            "Found {} documents in {} ({} entries ignored)",
            source.documents.len(),
            dir.display(),
            source.ignored.len()
        );

        Ok(source)
    }

    /// Build a source from explicit paths, kept in the given order
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            documents: paths.into_iter().map(DocumentFile::new).collect(),
            ignored: Vec::new(),
        }
    }

    /// Documents in processing order
    pub fn documents(&self) -> &[DocumentFile] {
        &self.documents
    }

    /// Names of directory entries that were not documents
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were found
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
