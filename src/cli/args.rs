//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueHint};

use crate::cli::{CliError, CliResult};
use crate::config::Settings;

/// Export GitLab CI/CD group and project variables as shell assignments
///
/// eval "$(glvars -t "$TOKEN" -u https://gitlab.com/api/v4 -p group/project)"
#[derive(Parser, Debug)]
#[command(name = "glvars")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Access token (sent as PRIVATE-TOKEN header)
    #[arg(
        short,
        long,
        env = "GITLAB_TOKEN",
        hide_env_values = true,
        required_unless_present = "completions"
    )]
    pub token: Option<String>,

    /// API base url, e.g. https://gitlab.com/api/v4
    #[arg(
        short,
        long,
        env = "GITLAB_API_URL",
        value_hint = ValueHint::Url,
        required_unless_present = "completions"
    )]
    pub url: Option<String>,

    /// Project id or namespaced path (group/project)
    #[arg(short, long, required_unless_present = "completions")]
    pub project: Option<String>,

    /// Print each request and its status to stderr
    #[arg(short, long, overrides_with = "verbose")]
    pub verbose: bool,

    /// Print variables with empty values (to unset them via eval)
    #[arg(short, long, overrides_with = "clear")]
    pub clear: bool,

    /// List all visible projects instead of printing variables
    #[arg(short, long, overrides_with = "list")]
    pub list: bool,

    /// Log level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Build run settings from the parsed arguments.
    pub fn to_settings(&self) -> CliResult<Settings> {
        let token = self.token.as_deref().ok_or_else(|| missing("--token"))?;
        let url = self.url.as_deref().ok_or_else(|| missing("--url"))?;
        let project = self.project.as_deref().ok_or_else(|| missing("--project"))?;

        Ok(Settings::new(token, url, project)?
            .with_verbose(self.verbose)
            .with_clear(self.clear)
            .with_list(self.list))
    }
}

fn missing(flag: &str) -> CliError {
    CliError::Usage(format!("the following required argument was not provided: {}", flag))
}
