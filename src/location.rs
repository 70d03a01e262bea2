//! Store location resolution
//!
//! A location is a directory plus a file name. The directory may be
//! absolute, `"."` for the working directory, or a bare relative segment
//! such as `.toolsconfig`, which resolves under the user's home directory.

use crate::error::ToolsConfigError;
use std::env;
use std::path::{Path, PathBuf};

/// Default directory under the user's home
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".toolsconfig";
/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

/// Where the configuration document lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    directory: String,
    filename: String,
}

impl ConfigLocation {
    pub fn new<D: Into<String>, F: Into<String>>(
        directory: D,
        filename: F,
    ) -> Self {
        ConfigLocation {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// Resolve the full path of the configuration file.
    ///
    /// Home-relative directories need the HOME environment variable; a
    /// missing HOME is an error.
    pub fn file_path(&self) -> Result<PathBuf, ToolsConfigError> {
        let dir = Path::new(&self.directory);
        if dir.is_absolute() || self.directory == "." {
            return Ok(dir.join(&self.filename));
        }
        let home = env::var_os("HOME")
            .ok_or(ToolsConfigError::MissingHomeDir)?;
        Ok(PathBuf::from(home)
            .join(&self.directory)
            .join(&self.filename))
    }
}

impl Default for ConfigLocation {
    /// `~/.toolsconfig/config.yaml`
    fn default() -> Self {
        ConfigLocation::new(DEFAULT_CONFIG_DIRECTORY, DEFAULT_CONFIG_FILENAME)
    }
}
