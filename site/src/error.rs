//! Error types for catalog loading and lead intake.

use std::path::PathBuf;

use thiserror::Error;

/// Why a catalog could not be loaded, or which authoring invariant it breaks.
///
/// Invariant variants are configuration defects: they are meant to be caught
/// by [`crate::Catalog::validate`] at startup or in tests, never handled while
/// rendering.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("unsupported catalog format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("brand field `{0}` must not be empty")]
    EmptyBrandField(&'static str),

    #[error("duplicate feature title: {0:?}")]
    DuplicateFeature(String),

    #[error("step ordinal {0:?} is not a number")]
    InvalidOrdinal(String),

    #[error("step ordinal {current:?} does not follow {previous:?}")]
    StepOrder { previous: String, current: String },

    #[error("{} pricing tiers are highlighted ({}); at most one may be", .0.len(), .0.join(", "))]
    MultipleHighlighted(Vec<String>),

    #[error("testimonial #{0} has an empty quote or attribution")]
    EmptyTestimonial(usize),

    #[error("duplicate FAQ question: {0:?}")]
    DuplicateQuestion(String),
}

/// Failure reported by a [`crate::intake::LeadIntake`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("lead intake endpoint is not configured")]
    NotConfigured,

    #[error("invalid lead intake endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("lead intake rejected the submission (HTTP {status})")]
    Rejected { status: u16 },

    #[error("could not reach lead intake: {0}")]
    Transport(String),
}

#[cfg(feature = "intake-http")]
impl From<reqwest::Error> for IntakeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => IntakeError::Rejected {
                status: status.as_u16(),
            },
            None => IntakeError::Transport(err.to_string()),
        }
    }
}
