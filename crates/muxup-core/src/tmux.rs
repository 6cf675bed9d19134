//! tmux installation probes.

use std::process::{Command, Stdio};

/// Flag accepted by tmux 1.8 and newer to set a session's start directory.
pub const DEFAULT_PATH_FLAG: &str = "-c";
/// Option name used by tmux releases before 1.8.
pub const DEFAULT_PATH_FLAG_LEGACY: &str = "default-path";

/// Whether the tmux binary is available on the PATH.
pub fn installed() -> bool {
    Command::new("sh")
        .args(["-c", "type tmux"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// The installed tmux version as a `major.minor` number.
///
/// `None` when tmux is not installed or its version output has no leading
/// numeric component (development builds report strings like `next-3.4`).
pub fn version() -> Option<f32> {
    if !installed() {
        return None;
    }
    let output = Command::new("tmux").arg("-V").output().ok()?;
    parse_version(&String::from_utf8_lossy(&output.stdout))
}

/// The flag used to set the default path of a new session.
///
/// An unknown version selects the modern flag.
pub fn default_path_option() -> &'static str {
    path_option_for(version())
}

fn path_option_for(version: Option<f32>) -> &'static str {
    match version {
        Some(v) if v < 1.8 => DEFAULT_PATH_FLAG_LEGACY,
        _ => DEFAULT_PATH_FLAG,
    }
}

/// Parses the second whitespace-separated token of the first line, keeping
/// only its leading `major.minor` prefix ("3.3a" reads as 3.3).
fn parse_version(output: &str) -> Option<f32> {
    let token = output.lines().next()?.split_whitespace().nth(1)?;
    let end = token
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(token.len());
    let numeric = &token[..end];
    if numeric.is_empty() {
        return None;
    }
    numeric.parse().ok()
}
