use std::path::PathBuf;

/// All domain errors for envrender.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum EnvRenderError {
    #[error(
        "type not found: '{value}'\n\n  \
         Supported types:\n    \
         → kubernetes-configmap\n    \
         → appengine"
    )]
    TypeNotFound { value: String },

    #[error("missing -{flag} flag")]
    MissingFlag { flag: &'static str },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path passed to -env-file is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Not a regular file: {path}\n\n  \
         -env-file must point to a file, not a directory or device."
    )]
    NotAFile { path: PathBuf },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected format: KEY=value (one per line).\n  \
         Comments (#) and blank lines are allowed."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Render failed: {detail}")]
    RenderFailed { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for EnvRenderError {
    fn from(err: minijinja::Error) -> Self {
        EnvRenderError::RenderFailed {
            detail: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvRenderError>;
