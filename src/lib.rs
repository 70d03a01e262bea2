// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Per-tool credential configuration for command-line utilities
//!
//! This crate manages a YAML-backed configuration document holding three
//! credential kinds (server, Azure subscription, generic key/value) plus
//! saved "favourite" invocations per host tool. Callers declare which
//! credentials an invocation requires; construction verifies every
//! requirement, auto-provisions placeholder entries for the missing ones,
//! and reports precisely what remains to be filled in.
//!
//! # Resolution precedence
//!
//! Every credential lookup resolves from, in order:
//!
//! 1. Environment variables — always win, never cached, never persisted
//! 2. The in-memory lookup cache
//! 3. The configuration file
//!
//! Environment-variable names are derived from the credential identifier:
//! `.` and `-` become `_`, the field suffix is appended with `_`, and the
//! result is upper-cased. A server `my.server-1.com` is overridden by
//! `MY_SERVER_1_COM_USERNAME` and `MY_SERVER_1_COM_PASSWORD`.
//!
//! # Configuration file
//!
//! The document lives at a caller-configured location, by default
//! `~/.toolsconfig/config.yaml`, written with owner-only permissions:
//!
//! ```yaml
//! defaultAzureSubscription: mysubscription
//! servers:
//! - url: testserver.io
//!   username: myuser
//!   password: mypassword
//! azureSubscriptions:
//! - name: mysubscription
//!   subscriptionID: 12345678-1234-1234-1234-123456789012
//!   tenantID: 87654321-4321-4321-4321-210987654321
//!   clientID: abcdef01-2345-6789-abcd-ef0123456789
//!   clientSecret: secret
//! generics:
//! - key: token
//!   value: secretvalue
//! favourites:
//!   mytool:
//!     deploy:
//!       name: deploy
//!       args:
//!       - push
//!       - --all
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use toolsconfig::{ConfigLocation, ToolConfiguration, ToolsConfigError};
//!
//! let mut configuration = ToolConfiguration::builder()
//!     .location(ConfigLocation::default())
//!     .required_server("testserver.io")
//!     .required_subscription("mysubscription")
//!     .build()
//!     .map_err(|err| {
//!         // a MissingCredentials error lists every entry to fill in; the
//!         // file now contains ready-to-edit placeholders for them
//!         eprintln!("{err}");
//!         err
//!     })?;
//!
//! let server = configuration.get_server_credentials("testserver.io")?;
//! println!("user: {}", server.username);
//! # Ok::<(), ToolsConfigError>(())
//! ```

pub mod config;
pub mod credential;
pub mod document;
pub mod env;
pub mod error;
pub mod location;
pub mod options;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::ToolConfiguration;
pub use credential::{
    AzureSubscriptionCredential, CredentialKind, Favourite, GenericCredential,
    ServerCredential,
};
pub use document::ConfigDocument;
pub use error::ToolsConfigError;
pub use location::{
    ConfigLocation, DEFAULT_CONFIG_DIRECTORY, DEFAULT_CONFIG_FILENAME,
};
pub use options::ConfigOptions;
pub use store::{DocumentStore, FileStore};
#[cfg(any(test, feature = "testing"))]
pub use testing::MemoryStore;
