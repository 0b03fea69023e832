use std::io::Write;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a right-aligned status line to stderr: `    Fetching pypi.org/...`
///
/// The `label` is padded to 12 characters and rendered in bold green.
pub fn status(label: &str, message: &str) {
    write_status(Style::new().green().bold(), label, message);
}

/// Like [`status`] but with a bold yellow label, used for recoverable
/// problems such as a failed metadata lookup.
pub fn status_warn(label: &str, message: &str) {
    write_status(Style::new().yellow().bold(), label, message);
}

fn write_status(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", format_status(&style, label, message));
}

fn format_status(style: &Style, label: &str, message: &str) -> String {
    format!("{:>12} {message}", style.apply_to(label))
}

/// Spinner shown while a blocking fetch is in flight.
///
/// Hidden when stderr is not a terminal so piped output stays clean.
pub fn spinner(message: &str) -> ProgressBar {
    if !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
