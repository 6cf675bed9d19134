//! Process environment snapshot.
//!
//! Every locator query is a function of this snapshot instead of reading
//! process globals, so tests can construct arbitrary environments without
//! touching the real one.

use std::env;
use std::path::PathBuf;

/// Environment variables captured once at startup.
///
/// An unset or empty variable is `None`.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `MUXUP_CONFIG`: override project directory, replaces the default
    /// search path entirely when set.
    pub config_dir: Option<PathBuf>,
    /// `XDG_CONFIG_HOME`: parent of the XDG project directory.
    pub xdg_config_home: Option<PathBuf>,
    /// `HOME`, falling back to the platform home directory.
    pub home: Option<PathBuf>,
    /// `EDITOR`.
    pub editor: Option<String>,
    /// `SHELL`.
    pub shell: Option<String>,
}

impl Environment {
    /// Reads the process environment.
    pub fn capture() -> Self {
        Self {
            config_dir: non_empty_var("MUXUP_CONFIG").map(PathBuf::from),
            xdg_config_home: non_empty_var("XDG_CONFIG_HOME").map(PathBuf::from),
            home: non_empty_var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
            editor: non_empty_var("EDITOR"),
            shell: non_empty_var("SHELL"),
        }
    }

    /// Whether `$EDITOR` is set and non-empty.
    pub fn has_editor(&self) -> bool {
        self.editor.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Whether `$SHELL` is set and non-empty.
    pub fn has_shell(&self) -> bool {
        self.shell.as_deref().is_some_and(|v| !v.is_empty())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
