//! Service container for dependency injection
//!
//! Wires services with the run settings and the HTTP transport.

use std::sync::Arc;

use crate::application::services::{ProjectService, VariableService};
use crate::config::Settings;
use crate::infrastructure::traits::{HttpClient, NoTrace, ReqwestClient, RequestTrace};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding the settings, the shared HTTP client and the services.
pub struct ServiceContainer {
    /// Run settings
    pub settings: Arc<Settings>,

    /// HTTP transport
    pub http: Arc<dyn HttpClient>,

    pub variables: VariableService,
    pub projects: ProjectService,
}

impl ServiceContainer {
    /// Create a service container backed by a real reqwest client.
    ///
    /// Verbose request lines go to `tracer`.
    pub fn new(settings: Settings, tracer: Arc<dyn RequestTrace>) -> InfraResult<Self> {
        let http = ReqwestClient::new().map_err(|source| InfraError::ClientInit { source })?;
        Ok(Self::with_tracer(settings, Arc::new(http), tracer))
    }

    /// Create a service container with a custom transport and no request trace (for testing).
    pub fn with_deps(settings: Settings, http: Arc<dyn HttpClient>) -> Self {
        Self::with_tracer(settings, http, Arc::new(NoTrace))
    }

    /// Create a service container with a custom transport and trace sink.
    pub fn with_tracer(
        settings: Settings,
        http: Arc<dyn HttpClient>,
        tracer: Arc<dyn RequestTrace>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            variables: VariableService::new(http.clone(), settings.clone())
                .with_tracer(tracer.clone()),
            projects: ProjectService::new(http.clone(), settings.clone()).with_tracer(tracer),
            settings,
            http,
        }
    }
}
