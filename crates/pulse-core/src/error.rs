//! Error types for the survey domain.

use thiserror::Error;

/// Result type for survey domain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when looking up surveys and questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No survey with this name in the catalog
    #[error("Unknown survey: {0}")]
    UnknownSurvey(String),

    /// Question index beyond the survey's range
    #[error("Survey {survey} has no question {index}")]
    QuestionOutOfRange { survey: String, index: usize },
}
