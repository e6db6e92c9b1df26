//! Error types for the web node.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

/// Result type for web node operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the client as error pages.
///
/// Recoverable flow conditions (out-of-order requests, already-completed
/// surveys) are not errors; they resolve to redirects with a flash notice
/// in the route layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown survey name or out-of-range question index
    #[error(transparent)]
    Core(#[from] pulse_core::Error),

    /// Required form field absent from a submission
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// The answer sequence is already full for this survey
    #[error("Every question of survey {survey} already has an answer")]
    ResponsesFull { survey: String },
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Core(_) => StatusCode::NOT_FOUND,
            Error::MissingField(_) => StatusCode::BAD_REQUEST,
            Error::ResponsesFull { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        let body = pages::error_page(status.as_u16(), &self.to_string());
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let unknown = Error::Core(pulse_core::Error::UnknownSurvey("x".into()));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let out_of_range = Error::Core(pulse_core::Error::QuestionOutOfRange {
            survey: "x".into(),
            index: 9,
        });
        assert_eq!(out_of_range.status(), StatusCode::NOT_FOUND);

        assert_eq!(
            Error::MissingField("answer").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::ResponsesFull { survey: "x".into() }.status(),
            StatusCode::CONFLICT
        );
    }
}
