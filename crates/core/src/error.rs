use thiserror::Error;

/// Rejected form input. Carries the field (or the offending text) so the
/// user-facing notice can say which field failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid score {0:?}: expected an integer")]
    InvalidScore(String),

    #[error("invalid follow-up date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}
