//! Error kinds surfaced by the catalog and the evaluator.
//!
//! The evaluator performs no I/O, so none of these are retriable. Presentation layers translate
//! them into user-facing messages.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Module selector outside the four known ids.
    #[error(
        "unknown module: {id} (expected prohibited-practices, high-risk, transparency, or gpai)"
    )]
    UnknownModule { id: String },

    /// Catalog version that is not shipped with this build.
    #[error("unknown catalog version: {version} (expected v1 or v2)")]
    UnknownCatalogVersion { version: String },

    /// Answer value outside the criterion's declared kind.
    #[error("invalid answer for '{criterion}': expected {expected}, got {found}")]
    InvalidAnswer {
        criterion: String,
        expected: String,
        found: String,
    },
}

impl AssessmentError {
    pub fn invalid_answer(
        criterion: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        AssessmentError::InvalidAnswer {
            criterion: criterion.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}
