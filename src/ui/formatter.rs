//! Styled messages for the terminal.
//!
//! The `format_*` functions build the text, the `display_*` functions write it
//! to stderr. Colors are dropped automatically when stderr is not a terminal.

use console::style;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}

/// Describe the step from the highest tagged version to the next one.
pub fn format_version_change(from: &str, to: &str) -> String {
    format!(
        "{} {} {}",
        style(from).for_stderr().dim(),
        style("→").for_stderr().yellow(),
        style(to).for_stderr().green().bold()
    )
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_version_change(from: &str, to: &str) {
    eprintln!("{}", format_version_change(from, to));
}
