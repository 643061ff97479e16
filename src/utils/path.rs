//! Path utilities: expand `~` in user-provided paths.

use std::path::PathBuf;

/// `~` and `~/…` resolve against the home directory; anything else is kept as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// [`expand_tilde`] as a display string, the form stored in [`crate::config::Config`].
pub fn expand_to_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}
