//! Where StyleHub keeps its files.
//!
//! Two things touch the disk: the favorites document (`storage.json`) and the
//! span log (`stylehub-spans.jsonl`). Both live in one per-plugin directory.
//! The only user-supplied path is the `theme_file` option, which may start
//! with `~`.
//!
//! Zellij exposes the host filesystem to plugins under [`HOST_MOUNT`].

use std::path::PathBuf;

/// Sandbox mount point of the directory Zellij was started from.
pub const HOST_MOUNT: &str = "/host";

/// Data directory relative to [`HOST_MOUNT`].
const DATA_DIR: &str = ".local/share/zellij/stylehub";

/// Directory holding the favorites document and the span log.
///
/// ```
/// use stylehub::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/stylehub")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT).join(DATA_DIR)
}

/// Resolves a `~`-relative option value against [`HOST_MOUNT`].
///
/// `~user` forms are left untouched.
///
/// ```
/// use stylehub::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_MOUNT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_MOUNT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_is_the_mount() {
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn other_users_and_relative_paths_pass_through() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
        assert_eq!(expand_tilde("themes/mocha.toml"), "themes/mocha.toml");
    }

    #[test]
    fn data_dir_is_under_the_mount() {
        assert!(get_data_dir().starts_with(HOST_MOUNT));
        assert!(get_data_dir().ends_with("stylehub"));
    }
}
