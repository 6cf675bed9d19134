//! Boundary to the external project loader.
//!
//! YAML parsing, template expansion, and session launching live behind
//! [`ProjectLoader`]; this module only produces a verified project file path
//! to hand across.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::locator::{LOCAL_PROJECT_FILE, Locator};

/// Options forwarded untouched to the project loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub force_attach: bool,
    pub force_detach: bool,
}

/// Loads a project definition from a verified file path.
pub trait ProjectLoader {
    type Project;

    /// # Errors
    /// Returns an error when the project file cannot be loaded.
    fn load(&self, path: &Path, options: &LoadOptions) -> Result<Self::Project>;
}

/// Resolves the project file to hand to the loader.
///
/// Without a name the local project file must exist; with a name the project
/// must resolve to a file present on disk.
///
/// # Errors
/// Fails when the required project file does not exist.
pub fn locate(locator: &Locator, name: Option<&str>) -> Result<PathBuf> {
    match name {
        None => match locator.local_project() {
            Some(local) => Ok(local),
            None => bail!("Project file at {LOCAL_PROJECT_FILE} doesn't exist."),
        },
        Some(name) => {
            if !locator.exists(name)? {
                bail!("Project {name} doesn't exist.");
            }
            locator.resolve(name)
        }
    }
}

/// Locates the project file for `name` and delegates it to `loader`.
///
/// # Errors
/// Fails when no project file exists for `name`, or when the loader rejects
/// the file.
pub fn validate<L: ProjectLoader>(
    locator: &Locator,
    loader: &L,
    name: Option<&str>,
    options: LoadOptions,
) -> Result<L::Project> {
    let path = locate(locator, name)?;
    loader.load(&path, &options)
}
