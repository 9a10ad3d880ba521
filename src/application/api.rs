//! REST endpoints and the authenticated GET used by all services

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::traits::{HttpClient, HttpResponse, RequestTrace};

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Endpoint urls derived from the configured base url and project.
#[derive(Debug, Clone, Copy)]
pub struct ApiEndpoints<'a> {
    settings: &'a Settings,
}

impl<'a> ApiEndpoints<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// `{url}/projects/{project}`
    pub fn project(&self) -> String {
        format!("{}/projects/{}", self.settings.api_url, self.settings.project)
    }

    /// `{url}/projects/{project}/variables`
    pub fn project_variables(&self) -> String {
        format!("{}/variables", self.project())
    }

    /// `{url}/groups/{group_id}/variables`
    pub fn group_variables(&self, group_id: u64) -> String {
        format!("{}/groups/{}/variables", self.settings.api_url, group_id)
    }

    /// `{url}/projects`
    pub fn projects(&self) -> String {
        format!("{}/projects", self.settings.api_url)
    }
}

/// Verbose line for one request: `GET <url> <status>`.
pub fn format_request_trace(method: &str, url: &str, status: u16) -> String {
    format!("{} {} {}", method, url, status)
}

/// Send an authenticated GET and fully read the response.
///
/// In verbose mode the request and its status go to `tracer`.
pub fn get(
    http: &dyn HttpClient,
    tracer: &dyn RequestTrace,
    settings: &Settings,
    url: &str,
) -> ApplicationResult<HttpResponse> {
    debug!("GET {}", url);
    let response = http.get(url, &[(TOKEN_HEADER, settings.token.as_str())])?;
    trace!("GET {} -> {} ({} bytes)", url, response.status, response.body.len());

    if settings.verbose {
        tracer.request("GET", url, response.status);
    }
    Ok(response)
}

/// Decode a JSON body, attributing failures to `url`.
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> ApplicationResult<T> {
    serde_json::from_str(body).map_err(|source| ApplicationError::Decode {
        url: url.to_string(),
        source,
    })
}
