//! Formatting utilities used for CLI and export outputs.

use crate::ui::messages::colors_enabled;

pub fn bold(s: &str) -> String {
    if colors_enabled() {
        format!("\x1b[1m{}\x1b[0m", s)
    } else {
        s.to_string()
    }
}

/// Hours rounded for display only; the stored value keeps full precision.
pub fn format_hours(hours: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, hours)
}

/// e.g. 3725 → "01h 02m 05s"
pub fn secs2readable(secs: u64) -> String {
    format!(
        "{:02}h {:02}m {:02}s",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
