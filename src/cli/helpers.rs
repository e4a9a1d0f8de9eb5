//! Shared helper functions for CLI commands

use console::style;

use crate::core::sink::Sink;

/// Format a price with two decimals for tabular output
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Emit a section header, styled when stdout is a terminal
///
/// Headers are preceded by a blank line, matching the sample session layout.
pub fn section(sink: &mut dyn Sink, title: &str, quiet: bool) {
    if quiet {
        return;
    }
    sink.emit("");
    sink.emit(&style(title).bold().to_string());
}

/// Summary line shown after part listings (e.g., "3 part(s)")
pub fn count_summary(count: usize) -> String {
    format!("{} part(s)", count)
}
