//! Project file location.
//!
//! Project directory resolution order:
//! 1. `MUXUP_CONFIG` environment variable (created on demand if set)
//! 2. `$XDG_CONFIG_HOME/muxup` (default: `~/.config/muxup`), if it exists
//! 3. `~/.muxup` (legacy), if it exists
//! 4. `$XDG_CONFIG_HOME/muxup`, created

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::env::Environment;

/// Extension of project files.
pub const PROJECT_EXT: &str = "yml";
/// Per-directory project file, relative to the working directory.
pub const LOCAL_PROJECT_FILE: &str = "./.muxup.yml";
/// Name of the project used when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "default";

const XDG_DIR_NAME: &str = "muxup";
const HOME_DIR_NAME: &str = ".muxup";

/// Locates project files from an environment snapshot.
///
/// Holds no mutable state; every query recomputes its candidate directories
/// from the snapshot.
#[derive(Debug, Clone)]
pub struct Locator {
    env: Environment,
}

impl Locator {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// The legacy project directory under the user's home. Pure path
    /// computation, no filesystem access.
    pub fn home_dir(&self) -> PathBuf {
        self.env.home.clone().unwrap_or_default().join(HOME_DIR_NAME)
    }

    /// The XDG project directory. Pure path computation, no filesystem
    /// access.
    pub fn xdg_dir(&self) -> PathBuf {
        match &self.env.xdg_config_home {
            Some(parent) => parent.join(XDG_DIR_NAME),
            None => self
                .env
                .home
                .clone()
                .unwrap_or_default()
                .join(".config")
                .join(XDG_DIR_NAME),
        }
    }

    /// The directory (created if needed) in which to store new projects.
    ///
    /// The override directory always wins when `MUXUP_CONFIG` is set; when
    /// both the XDG and legacy home directories exist, XDG wins silently.
    ///
    /// # Errors
    /// Returns an error when directory creation fails for any reason other
    /// than the directory already existing.
    pub fn root_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = self.override_dir() {
            if !dir.is_dir() {
                create_dir(dir)?;
            }
            return Ok(dir.to_path_buf());
        }
        let xdg = self.xdg_dir();
        if xdg.is_dir() {
            return Ok(xdg);
        }
        let home = self.home_dir();
        if home.is_dir() {
            return Ok(home);
        }
        // No project directory specified or existing; default to XDG.
        create_dir(&xdg)?;
        Ok(xdg)
    }

    /// The first project file found matching `name`.
    ///
    /// Searches the override directory (when `MUXUP_CONFIG` is set), then
    /// the XDG and legacy home directories, each recursively. When several
    /// files share a stem in different subdirectories the first hit in
    /// traversal order wins; that pick is not stable. Falls back to the
    /// local project file when present, then to the default location under
    /// [`Self::root_dir`] — the returned path does not have to exist.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if let Some(dir) = self.override_dir()
            && let Some(found) = find_in(dir, name)?
        {
            return Ok(found);
        }
        if let Some(found) = find_in(&self.xdg_dir(), name)? {
            return Ok(found);
        }
        if let Some(found) = find_in(&self.home_dir(), name)? {
            return Ok(found);
        }
        if let Some(local) = self.local_project() {
            return Ok(local);
        }
        self.default_project_path(name)
    }

    /// Whether `name` resolves to a file present on disk.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.resolve(name)?.is_file())
    }

    /// The local project file in the current working directory, if present.
    pub fn local_project(&self) -> Option<PathBuf> {
        let local = Path::new(LOCAL_PROJECT_FILE);
        local.is_file().then(|| local.to_path_buf())
    }

    /// Default on-disk location for `name`, whether or not a file exists
    /// there.
    pub fn default_project_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root_dir()?.join(format!("{name}.{PROJECT_EXT}")))
    }

    /// Location of the `default` project.
    pub fn default_path(&self) -> Result<PathBuf> {
        self.default_project_path(DEFAULT_PROJECT_NAME)
    }

    /// Whether a `default` project exists anywhere on the search path.
    pub fn has_default(&self) -> Result<bool> {
        self.exists(DEFAULT_PROJECT_NAME)
    }

    /// Directories searched for project files.
    ///
    /// The override directory replaces the default pair entirely; a
    /// directory that does not exist simply yields no matches.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        match self.override_dir() {
            Some(dir) => vec![dir.to_path_buf()],
            None => vec![self.xdg_dir(), self.home_dir()],
        }
    }

    /// Sorted names of all projects, including duplicates.
    ///
    /// A name present under two search directories appears twice; the
    /// duplicate surfaces shadowing to the user instead of hiding it.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for dir in self.search_dirs() {
            for file in collect_project_files(&dir)? {
                if let Ok(rel) = file.strip_prefix(&dir) {
                    names.push(rel.with_extension("").to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn override_dir(&self) -> Option<&Path> {
        self.env.config_dir.as_deref()
    }
}

/// Finds the first file under `dir` (any depth) whose stem equals `name`.
fn find_in(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    let target = OsStr::new(name);
    Ok(collect_project_files(dir)?
        .into_iter()
        .find(|path| path.file_stem() == Some(target)))
}

/// Recursively collects project files under `dir`. A missing directory
/// yields no matches; any other I/O failure propagates.
fn collect_project_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(files),
        Err(e) => {
            return Err(e).with_context(|| format!("read directory {}", dir.display()));
        }
    };

    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("read entry type of {}", path.display()))?;

        if file_type.is_dir() {
            files.extend(collect_project_files(&path)?);
        } else if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => files.extend(collect_project_files(&path)?),
                Ok(meta) if meta.is_file() && is_project_file(&path) => files.push(path),
                // Broken symlinks never match.
                _ => {}
            }
        } else if is_project_file(&path) {
            files.push(path);
        }
    }

    Ok(files)
}

fn is_project_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(PROJECT_EXT))
}

fn create_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created project directory");
            Ok(())
        }
        // Concurrent creation of the same directory is a benign outcome.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("create directory {}", path.display())),
    }
}
