//! CI/CD variable service
//!
//! Fetches group and project scoped variables and merges them so that
//! project variables override group variables of the same name.

use std::sync::Arc;

use tracing::{debug, instrument, trace, warn};

use crate::application::api::{self, ApiEndpoints};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Project, Variable, VariableSet};
use crate::infrastructure::traits::{HttpClient, NoTrace, RequestTrace};

/// Service for resolving the variables visible to one project.
pub struct VariableService {
    http: Arc<dyn HttpClient>,
    tracer: Arc<dyn RequestTrace>,
    settings: Arc<Settings>,
}

impl VariableService {
    /// Create a new variable service.
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

    /// Fetch one variables endpoint.
    ///
    /// Any status other than 200 yields an empty set: missing permission,
    /// unknown project and "no variables" are not told apart.
    /// Transport and JSON errors are returned as errors.
    #[instrument(level = "debug", skip(self))]
    pub fn fetch_variables(&self, url: &str) -> ApplicationResult<VariableSet> {
        let response = api::get(self.http.as_ref(), self.tracer.as_ref(), &self.settings, url)?;
        if !response.is_ok() {
            debug!("fetch_variables: status {}, treating as empty", response.status);
            return Ok(VariableSet::new());
        }

        // null decodes as no variables
        let variables: Vec<Variable> =
            api::decode::<Option<Vec<Variable>>>(url, &response.body)?.unwrap_or_default();
        debug!("fetch_variables: decoded {} variables", variables.len());
        for var in &variables {
            trace!(
                key = %var.key,
                variable_type = var.variable_type.as_deref().unwrap_or("env_var"),
                protected = var.protected,
                masked = var.masked,
                environment_scope = var.environment_scope.as_deref().unwrap_or("*"),
                "variable"
            );
        }
        Ok(variables.into_iter().collect())
    }

    /// Look up the id of the group owning the configured project.
    ///
    /// Returns `None` when the project lookup does not answer 200 or the
    /// project has no namespace id; there is then no group to query.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_group_id(&self) -> ApplicationResult<Option<u64>> {
        let url = ApiEndpoints::new(&self.settings).project();
        let response = api::get(self.http.as_ref(), self.tracer.as_ref(), &self.settings, &url)?;
        if !response.is_ok() {
            warn!(
                "project lookup for {} returned {}, skipping group variables",
                self.settings.project.raw(),
                response.status
            );
            return Ok(None);
        }

        let project: Project = api::decode(&url, &response.body)?;
        match project.namespace.id {
            0 => {
                warn!("project {} has no namespace id", project.id);
                Ok(None)
            }
            id => Ok(Some(id)),
        }
    }

    /// Variables of the group owning the project (empty if unresolved).
    pub fn group_variables(&self) -> ApplicationResult<VariableSet> {
        match self.resolve_group_id()? {
            Some(group_id) => {
                let url = ApiEndpoints::new(&self.settings).group_variables(group_id);
                self.fetch_variables(&url)
            }
            None => Ok(VariableSet::new()),
        }
    }

    /// Variables defined directly on the project.
    pub fn project_variables(&self) -> ApplicationResult<VariableSet> {
        let url = ApiEndpoints::new(&self.settings).project_variables();
        self.fetch_variables(&url)
    }

    /// Group variables overlaid with project variables.
    ///
    /// Requests are issued in order: project lookup, group variables,
    /// project variables.
    pub fn collect(&self) -> ApplicationResult<VariableSet> {
        let mut merged = self.group_variables()?;
        debug!("collect: {} group variables", merged.len());
        let project = self.project_variables()?;
        debug!("collect: {} project variables", project.len());
        merged.overlay(project);
        Ok(merged)
    }
}
