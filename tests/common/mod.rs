//! Shared test doubles

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use glvars::config::Settings;
use glvars::infrastructure::traits::{HttpClient, HttpResponse, RequestTrace, TransportError};

pub const API: &str = "https://gitlab.example.com/api/v4";

/// Request as seen by the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

enum Canned {
    Respond(HttpResponse),
    Fail(String),
}

/// Mock transport with canned responses per url.
///
/// Unknown urls answer 404 with a GitLab style error object.
#[derive(Default)]
pub struct MockHttpClient {
    routes: HashMap<String, Canned>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Canned::Respond(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Canned::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        match self.routes.get(url) {
            Some(Canned::Respond(resp)) => Ok(resp.clone()),
            Some(Canned::Fail(message)) => Err(TransportError::new(
                url,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.clone()),
            )),
            None => Ok(HttpResponse::new(404, r#"{"message":"404 Not Found"}"#)),
        }
    }
}

/// Trace sink that keeps every verbose line
#[derive(Default)]
pub struct RecordingTrace {
    lines: Mutex<Vec<String>>,
}

impl RecordingTrace {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl RequestTrace for RecordingTrace {
    fn request(&self, method: &str, url: &str, status: u16) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {} {}", method, url, status));
    }
}

/// Settings against the mock API for `project`
pub fn settings(project: &str) -> Settings {
    Settings::new("secret-token", API, project).unwrap()
}
