//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the domain model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("project identifier must not be empty")]
    EmptyProject,

    #[error("API url must not be empty")]
    EmptyApiUrl,

    #[error("access token must not be empty")]
    EmptyToken,
}
