//! Per-user directories of the command-line tool.

use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "afa-i18n";
/// Client storage file name.
const STORAGE_FILE: &str = "storage.json";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Config directory of the tool, created on demand.
///
/// Output:
/// - `$HOME/.config/afa-i18n` when `HOME` is set and the directory can be created,
///   otherwise `$XDG_CONFIG_HOME/afa-i18n` (or `./.config/afa-i18n`)
///
/// Details:
/// - Creation failures are ignored here; callers writing into the directory report them
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default client storage file: `<config>/storage.json`.
#[must_use]
pub fn storage_path() -> PathBuf {
    config_dir().join(STORAGE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_live_under_home() {
        let _guard = crate::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig_home = env::var_os("HOME");
        unsafe { env::set_var("HOME", tmp.path()) };

        let config = config_dir();
        assert_eq!(config, tmp.path().join(".config").join(APP_DIR));
        assert!(config.is_dir());
        assert!(logs_dir().is_dir());
        assert_eq!(storage_path(), config.join(STORAGE_FILE));

        unsafe {
            match orig_home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }
    }

    #[test]
    fn test_xdg_base_dir_prefers_variable() {
        let _guard = crate::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig = env::var_os("XDG_CONFIG_HOME");
        unsafe { env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-test") };
        assert_eq!(xdg_base_dir("XDG_CONFIG_HOME", &[".config"]), PathBuf::from("/tmp/xdg-test"));
        unsafe {
            match orig {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
