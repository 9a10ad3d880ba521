//! Application services
//!
//! Concrete service implementations that talk to the REST API.
//! Services depend on the `HttpClient` boundary trait but are themselves
//! concrete structs, not traits.

mod projects;
mod variables;

pub use projects::ProjectService;
pub use variables::VariableService;
