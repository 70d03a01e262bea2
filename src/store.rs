// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Persisted store adapter
//!
//! The document is read and written as a unit. A missing or unreadable file
//! reads as the empty document so a first run behaves like "everything
//! missing" instead of failing; write failures always propagate.
//!
//! The store is a trait so tests can substitute an in-memory implementation
//! for the file-backed one.

use crate::document::ConfigDocument;
use crate::error::ToolsConfigError;
use log::{debug, warn};
use std::fs;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::PathBuf;

/// Mode of the configuration file on write
pub const CONFIG_FILE_MODE: u32 = 0o600;
/// Mode of the configuration directory when it has to be created
pub const CONFIG_DIR_MODE: u32 = 0o700;

/// Load/save seam between the facade and the persisted document
pub trait DocumentStore {
    /// Read the whole document. A missing or unreadable file yields the
    /// empty document, not an error.
    fn load(&self) -> ConfigDocument;

    /// Write the whole document
    fn save(&self, document: &ConfigDocument) -> Result<(), ToolsConfigError>;
}

/// File-backed store holding the document as a single YAML file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> ConfigDocument {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                debug!(
                    "Configuration file {} not readable ({error}), starting with an empty document",
                    self.path.display()
                );
                return ConfigDocument::default();
            }
        };
        if content.trim().is_empty() {
            return ConfigDocument::default();
        }
        match serde_yaml::from_str(&content) {
            Ok(document) => {
                debug!("Loaded configuration from {}", self.path.display());
                document
            }
            Err(error) => {
                warn!(
                    "Failed to parse configuration file {}: {error}",
                    self.path.display()
                );
                ConfigDocument::default()
            }
        }
    }

    fn save(&self, document: &ConfigDocument) -> Result<(), ToolsConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(
                    "Creating configuration directory {}",
                    parent.display()
                );
                fs::DirBuilder::new().mode(CONFIG_DIR_MODE).create(parent)?;
            }
        }
        let body = serde_yaml::to_string(document)?;
        fs::write(&self.path, body)?;
        fs::set_permissions(
            &self.path,
            fs::Permissions::from_mode(CONFIG_FILE_MODE),
        )?;
        debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}
