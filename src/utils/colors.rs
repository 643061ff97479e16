//! ANSI color helper utilities for terminal output.
use crate::ui::messages::colors_enabled;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Grey for zero hours (and blank cells), plain otherwise.
pub fn colorize_hours(value: &str, hours: f64) -> String {
    if colors_enabled() && (value.trim().is_empty() || hours == 0.0) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
