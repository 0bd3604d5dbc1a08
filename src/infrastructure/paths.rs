//! Path utilities for the Zellij sandbox.
//!
//! Inside the plugin sandbox the host's home directory is mounted at `/host`.
//! User-supplied paths (such as `theme_file`) are written with `~`, so they
//! need translating before the plugin can open them.

use std::path::PathBuf;

/// Sandbox mount point of the host home directory.
const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory.
///
/// Resolves to `~/.local/share/zellij/zinema` on the host when Zellij was
/// started from the home directory. The trace file lives here.
///
/// ```
/// use zinema::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zinema"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zinema")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// ```
/// use zinema::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dracula.toml"), "/host/themes/dracula.toml");
/// assert_eq!(expand_tilde("/etc/zinema.toml"), "/etc/zinema.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
