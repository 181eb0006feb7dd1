use thiserror::Error;

/// Failures while turning a path into a [`crate::GhinRecord`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("GHIN data file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read GHIN data file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("GHIN data in {path} must be a JSON object, found {found}")]
    NotAnObject { path: String, found: &'static str },
}

impl LoadError {
    /// Whether the caller can fix the problem and retry (e.g. a wrong path)
    /// as opposed to the document itself being unusable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LoadError::NotFound { .. } => true,
            LoadError::Io { .. } => true,
            LoadError::Malformed { .. } => false,
            LoadError::NotAnObject { .. } => false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
