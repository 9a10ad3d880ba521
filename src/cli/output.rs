//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Data goes to stdout, everything else to stderr.

use std::error::Error;

use colored::Colorize;

use crate::application::api::format_request_trace;
use crate::infrastructure::traits::RequestTrace;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print error followed by its source chain to stderr
pub fn error_chain(err: &(dyn Error + 'static)) {
    error(err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {}: {}", "caused by".yellow(), cause);
        source = cause.source();
    }
}

/// Print plain output (no color, for data/export statements)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print diagnostic line (no color) to stderr, kept apart from data on stdout
pub fn diagnostic(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg);
}

/// Request trace written to stderr in verbose mode
#[derive(Debug, Default)]
pub struct TerminalTrace;

impl RequestTrace for TerminalTrace {
    fn request(&self, method: &str, url: &str, status: u16) {
        diagnostic(&format_request_trace(method, url, status));
    }
}
