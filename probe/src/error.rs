#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Could not launch '{program}' due to: {why}")]
    Launch { program: String, why: std::io::Error },

    #[error("'{program}' {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

impl ProbeError {
    /// What the prober wrote to stderr, empty when it could not be launched
    pub fn stderr(&self) -> &str {
        match self {
            Self::Launch { .. } => "",
            Self::Failed { stderr, .. } => stderr,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("the report has no `streams` array")]
    MissingStreams,

    #[error("the report doesn't contain any stream")]
    NoStream,

    #[error("the first stream has no `{field}` field")]
    MissingField { field: &'static str },

    #[error("the first stream's `{field}` field should be {expected}, got: {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: serde_json::Value,
    },
}
