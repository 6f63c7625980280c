use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MongelError {
    #[error("failed to load dataset from {path}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },

    #[error("invalid dataset: {0}")]
    DatasetInvalid(String),

    #[error("training set is empty; at least one instance is required to induce rules")]
    EmptyTrainingSet,

    #[error("attribute count mismatch: expected {expected} values, found {found}")]
    AttributeCountMismatch { expected: usize, found: usize },

    #[error("invalid rule: {0}")]
    RuleInvalid(String),

    #[error("unknown classification strategy '{0}'. Available: nearest, ordered")]
    UnknownStrategy(String),

    #[error("induction cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
