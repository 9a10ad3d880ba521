//! Output formatting: shell assignments and project listing lines

use crate::domain::{Project, VariableSet};

/// Wrap `value` in single quotes for POSIX shells.
///
/// An embedded `'` closes the quote, emits an escaped quote and reopens it.
pub fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// `KEY='VALUE'`, or `KEY=''` when clearing.
pub fn format_assignment(key: &str, value: &str, clear: bool) -> String {
    if clear {
        format!("{}=''", key)
    } else {
        format!("{}={}", key, single_quote(value))
    }
}

/// One assignment line per variable, ordered by key.
pub fn render_assignments(vars: &VariableSet, clear: bool) -> Vec<String> {
    vars.iter()
        .map(|(k, v)| format_assignment(k, v, clear))
        .collect()
}

/// `id<TAB>path_with_namespace`
pub fn format_project_line(project: &Project) -> String {
    format!("{}\t{}", project.id, project.path_with_namespace)
}

/// One line per project in the order given.
pub fn render_projects(projects: &[Project]) -> Vec<String> {
    projects.iter().map(format_project_line).collect()
}
