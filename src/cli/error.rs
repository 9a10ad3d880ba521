//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error("invalid arguments")]
    InvalidArgs(#[from] DomainError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Domain(d) => CliError::InvalidArgs(d),
            other => CliError::Infra(InfraError::Application(other)),
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::ARGS,
            CliError::Infra(e) => match e {
                InfraError::ClientInit { .. } => crate::exitcode::SOFTWARE,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::ARGS,
                    ApplicationError::Transport(_) => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Decode { .. } => crate::exitcode::DATAERR,
                },
            },
        }
    }
}
