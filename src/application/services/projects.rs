//! Project listing service

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::api::{self, ApiEndpoints};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::Project;
use crate::infrastructure::traits::{HttpClient, NoTrace, RequestTrace};

/// Service for listing the projects visible to the token.
pub struct ProjectService {
    http: Arc<dyn HttpClient>,
    tracer: Arc<dyn RequestTrace>,
    settings: Arc<Settings>,
}

impl ProjectService {
    /// Create a new project service.
    pub fn new(http: Arc<dyn HttpClient>, settings: Arc<Settings>) -> Self {
        Self {
            http,
            tracer: Arc::new(NoTrace),
            settings,
        }
    }

    /// Send verbose request lines to `tracer`.
    pub fn with_tracer(mut self, tracer: Arc<dyn RequestTrace>) -> Self {
        self.tracer = tracer;
        self
    }

    /// List projects in the order the API returns them.
    ///
    /// The status is not checked. A non-200 answer usually carries an error
    /// object instead of an array, which lists as nothing; so does `null`.
    /// Malformed JSON is an error regardless of status.
    #[instrument(level = "debug", skip(self))]
    pub fn list(&self) -> ApplicationResult<Vec<Project>> {
        let url = ApiEndpoints::new(&self.settings).projects();
        let response = api::get(self.http.as_ref(), self.tracer.as_ref(), &self.settings, &url)?;

        let body: serde_json::Value = api::decode(&url, &response.body)?;
        if body.is_null() {
            debug!("list: null body, no projects");
            return Ok(Vec::new());
        }
        if !body.is_array() && !response.is_ok() {
            warn!("project listing returned {}: {}", response.status, body);
            return Ok(Vec::new());
        }

        let projects: Vec<Project> =
            serde_json::from_value(body).map_err(|source| ApplicationError::Decode {
                url: url.clone(),
                source,
            })?;
        debug!("list: {} projects", projects.len());
        Ok(projects)
    }
}
