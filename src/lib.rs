//! glvars: export GitLab CI/CD variables as shell assignments
//!
//! Layers, innermost first:
//! - `domain`: variables, projects, merge rules
//! - `application`: services issuing the REST calls, output formatting
//! - `infrastructure`: HTTP transport and service wiring
//! - `cli`: argument parsing, dispatch, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
