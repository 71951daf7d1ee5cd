use std::path::PathBuf;

/// Errors raised by the exporter and the license checker.
#[derive(Debug, thiserror::Error)]
pub enum BuildToolError {
    /// A variable Meson sets for post-configuration scripts is absent.
    #[error("Meson is too old; it does not set {0} for postconf scripts.")]
    MissingEnv(&'static str),

    #[error("cannot split introspection command line: {0:?}")]
    InvalidCommandLine(String),

    #[error("failed to run introspection command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("introspection command `{command}` exited with {status}: {stderr}")]
    Introspection {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("malformed introspection output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildToolError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildToolError>;
