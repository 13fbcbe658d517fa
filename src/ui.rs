//! Terminal output for the command-line front end.
//!
//! Everything here writes to stderr so stdout carries only the version.

use crate::boundary::{BoundaryWarning, WarningSink};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Sink that shows warnings on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl WarningSink for ConsoleSink {
    fn warn(&self, warning: BoundaryWarning) {
        log::debug!("{}", warning);
        display_boundary_warning(&warning);
    }
}
