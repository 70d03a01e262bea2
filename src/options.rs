//! Facade construction options
//!
//! Callers declare which credentials an invocation requires and where the
//! document lives, then build the facade. The store location is mandatory:
//! building without one is a caller bug and aborts instead of guessing a
//! path.

use crate::config::ToolConfiguration;
use crate::credential::{
    AzureSubscriptionCredential, CredentialKind, GenericCredential,
    ServerCredential,
};
use crate::document::ConfigDocument;
use crate::error::ToolsConfigError;
use crate::location::ConfigLocation;
use crate::store::{DocumentStore, FileStore};

/// Builder for [`ToolConfiguration`]
///
/// # Examples
///
/// ```no_run
/// use toolsconfig::{ConfigLocation, ConfigOptions};
///
/// let configuration = ConfigOptions::new()
///     .location(ConfigLocation::default())
///     .required_server("testserver.io")
///     .required_subscription("testSubscription01")
///     .build()?;
/// # Ok::<(), toolsconfig::ToolsConfigError>(())
/// ```
#[derive(Default)]
pub struct ConfigOptions {
    pub(crate) required_servers: Vec<String>,
    pub(crate) required_subscriptions: Vec<String>,
    pub(crate) required_generics: Vec<String>,
    pub(crate) update_config: bool,
    location: Option<ConfigLocation>,
    store: Option<Box<dyn DocumentStore>>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        ConfigOptions {
            update_config: true,
            ..Default::default()
        }
    }

    /// Require the server credential with the given URL
    pub fn required_server<T: Into<String>>(mut self, url: T) -> Self {
        self.required_servers.push(url.into());
        self
    }

    /// Require the subscription credential with the given name or id
    pub fn required_subscription<T: Into<String>>(
        mut self,
        name_or_id: T,
    ) -> Self {
        self.required_subscriptions.push(name_or_id.into());
        self
    }

    /// Require the generic credential with the given key
    pub fn required_generic<T: Into<String>>(mut self, key: T) -> Self {
        self.required_generics.push(key.into());
        self
    }

    /// Whether auto-provisioned placeholders are persisted at construction
    /// time. Default is `true`. Set operations always write through,
    /// independent of this flag.
    pub fn update_config(mut self, value: bool) -> Self {
        self.update_config = value;
        self
    }

    /// Location of the configuration file. Mandatory unless a store is
    /// injected with [`store`](Self::store).
    pub fn location(mut self, location: ConfigLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Substitute the document store, e.g. with an in-memory one in tests
    pub fn store<S: DocumentStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Build the facade, running the construction protocol (load, verify,
    /// placeholder merge, conditional persist).
    ///
    /// # Errors
    ///
    /// Returns [`ToolsConfigError::MissingCredentials`] when any requirement
    /// is unsatisfied, or a store error when persisting the merged document
    /// fails.
    ///
    /// # Panics
    ///
    /// Panics if neither a location nor a store was configured. This is a
    /// programming-usage error, not a runtime condition.
    pub fn build(mut self) -> Result<ToolConfiguration, ToolsConfigError> {
        let store: Box<dyn DocumentStore> =
            match (self.store.take(), self.location.take()) {
                (Some(store), _) => store,
                (None, Some(location)) => {
                    Box::new(FileStore::new(location.file_path()?))
                }
                (None, None) => panic!(
                    "configuration store location not set - pass ConfigOptions::location before build"
                ),
            };
        ToolConfiguration::with_store(store, &self)
    }

    /// The required entries as a placeholder skeleton document, input to
    /// the merge engine
    pub(crate) fn required_document(&self) -> ConfigDocument {
        ConfigDocument {
            servers: self
                .required_servers
                .iter()
                .map(|url| ServerCredential::placeholder(url))
                .collect(),
            azure_subscriptions: self
                .required_subscriptions
                .iter()
                .map(|id| AzureSubscriptionCredential::placeholder(id))
                .collect(),
            generics: self
                .required_generics
                .iter()
                .map(|key| GenericCredential::placeholder(key))
                .collect(),
            ..Default::default()
        }
    }
}
