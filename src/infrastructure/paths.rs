//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which Zellij
//! maps to the directory it was started from (usually the user's home).

use std::path::PathBuf;

/// Returns the plugin's data directory, where trace files are written.
///
/// # Examples
///
/// ```
/// use propsift::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/propsift"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("propsift")
}

/// Maps a `~`-prefixed path onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use propsift::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/listings.json"), "/host/listings.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/listings.json"), "/data/listings.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Drops the `/host` prefix so a sandbox path reads like a host path.
///
/// # Examples
///
/// ```
/// use propsift::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/listings.json"), "~/listings.json");
/// assert_eq!(strip_host_prefix("/host"), "~");
/// assert_eq!(strip_host_prefix("/data/listings.json"), "/data/listings.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
