//! Locates the configuration directory.
//!
//! `XDG_CONFIG_HOME` is honoured on every platform so the config file lives
//! in the same place on Linux and macOS.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tl-relay";

/// Returns the configuration directory for tl-relay.
///
/// Uses `$XDG_CONFIG_HOME/tl-relay` when the variable holds an absolute
/// path and `~/.config/tl-relay` otherwise. Relative or empty values are
/// ignored, as the XDG base directory rules require.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|path| is_usable_base(path))
    {
        return Ok(xdg.join(APP_DIR));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| anyhow!("Failed to determine home directory; set XDG_CONFIG_HOME"))?;
    Ok(home.join(".config").join(APP_DIR))
}

fn is_usable_base(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let original = std::env::var_os("XDG_CONFIG_HOME");
        match value {
            Some(v) => unsafe { std::env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }

        let result = f();

        match original {
            Some(v) => unsafe { std::env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }
        result
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let dir = with_xdg(None, config_dir).unwrap();
        assert!(dir.ends_with(".config/tl-relay"));
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let dir = with_xdg(Some("/custom/config"), config_dir).unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/tl-relay"));
    }

    #[test]
    #[serial]
    fn test_relative_xdg_is_ignored() {
        let dir = with_xdg(Some("relative/config"), config_dir).unwrap();
        assert!(dir.ends_with(".config/tl-relay"));
        assert!(dir.is_absolute());
    }

    #[test]
    #[serial]
    fn test_empty_xdg_is_ignored() {
        let dir = with_xdg(Some(""), config_dir).unwrap();
        assert!(dir.ends_with(".config/tl-relay"));
    }
}
