//! Run configuration
//!
//! Settings come from the command line only (flags, or the environment
//! variables clap maps onto them). Nothing is read from disk.

use crate::domain::{DomainError, ProjectRef};

/// Immutable configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Value for the `PRIVATE-TOKEN` header
    pub token: String,
    /// API base url, without trailing slash (e.g. https://gitlab.com/api/v4)
    pub api_url: String,
    /// Project whose variables are exported
    pub project: ProjectRef,
    /// Trace every request to stderr
    pub verbose: bool,
    /// Print keys with blank values
    pub clear: bool,
    /// List projects instead of exporting variables
    pub list: bool,
}

impl Settings {
    /// Build settings for the given connection, with all switches off.
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
        project: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::EmptyToken);
        }
        let api_url = normalize_api_url(&api_url.into());
        if api_url.is_empty() {
            return Err(DomainError::EmptyApiUrl);
        }

        Ok(Self {
            token,
            api_url,
            project: ProjectRef::new(project)?,
            verbose: false,
            clear: false,
            list: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }
}

/// Strip a single trailing `/` so endpoint paths can be appended verbatim.
fn normalize_api_url(url: &str) -> String {
    url.trim().strip_suffix('/').unwrap_or(url.trim()).to_string()
}
