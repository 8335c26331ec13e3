//! Reading the JSON options document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Failure to turn a present options file into a document.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in options file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("options file {path} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

/// Parsed top-level object of the options file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsDocument {
    fields: Map<String, Value>,
}

impl OptionsDocument {
    /// Parse document text. `path` is only used for error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(content).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(OptionsError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for OptionsDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Read the options file.
///
/// Returns `Ok(None)` when the file does not exist; any other I/O failure,
/// malformed JSON, or a non-object top level is an error.
pub fn read_options(path: &Path) -> Result<Option<OptionsDocument>, OptionsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(OptionsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    OptionsDocument::parse(path, &content).map(Some)
}
