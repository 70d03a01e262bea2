// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Test support
//!
//! [`MemoryStore`] substitutes the file-backed store in tests: it keeps the
//! document in memory behind a shared handle so a test can inspect what the
//! facade persisted, count the writes, and inject write failures.

use crate::document::ConfigDocument;
use crate::error::ToolsConfigError;
use crate::store::DocumentStore;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Default)]
struct MemoryStoreInner {
    document: ConfigDocument,
    save_count: usize,
    fail_saves: bool,
}

/// In-memory document store with a shared inspection handle.
///
/// Clones share the same underlying document, so a test keeps one handle
/// while the facade owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryStoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with the given document
    pub fn with_document(document: ConfigDocument) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().document = document;
        store
    }

    /// The current persisted document
    pub fn document(&self) -> ConfigDocument {
        self.inner.borrow().document.clone()
    }

    /// How many times `save` was called
    pub fn save_count(&self) -> usize {
        self.inner.borrow().save_count
    }

    /// Make subsequent `save` calls fail with an I/O error
    pub fn fail_saves(&self, fail: bool) {
        self.inner.borrow_mut().fail_saves = fail;
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> ConfigDocument {
        self.inner.borrow().document.clone()
    }

    fn save(&self, document: &ConfigDocument) -> Result<(), ToolsConfigError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_saves {
            return Err(ToolsConfigError::Io(io::Error::other(
                "injected save failure",
            )));
        }
        inner.document = document.clone();
        inner.save_count += 1;
        Ok(())
    }
}
