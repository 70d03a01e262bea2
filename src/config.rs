// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Configuration facade
//!
//! [`ToolConfiguration`] is the stateful object callers interact with. It is
//! built through [`ConfigOptions`](crate::options::ConfigOptions): the
//! construction protocol loads the document, verifies every required
//! credential, auto-provisions placeholders for the missing ones, and fails
//! with the full missing list so the operator can fill in the
//! pre-populated file.
//!
//! Resolution precedence for every get operation (highest first):
//!
//! 1. Environment variables (never cached, never persisted)
//! 2. The in-memory lookup cache
//! 3. The document
//!
//! The facade is single-threaded: set operations rewrite the whole document
//! from the in-memory copy without re-reading the file, so two facades open
//! against the same file clobber each other. Callers needing concurrency
//! must synchronize externally.

use crate::credential::{
    AzureSubscriptionCredential, CredentialKind, Favourite, GenericCredential,
    ServerCredential,
};
use crate::document::{lookup, upsert, ConfigDocument};
use crate::error::ToolsConfigError;
use crate::options::ConfigOptions;
use crate::store::DocumentStore;
use log::{debug, warn};
use std::collections::HashMap;

/// Per-tool credential configuration backed by a persisted document
pub struct ToolConfiguration {
    document: ConfigDocument,
    store: Box<dyn DocumentStore>,
    servers: HashMap<String, ServerCredential>,
    subscriptions: HashMap<String, AzureSubscriptionCredential>,
    generics: HashMap<String, GenericCredential>,
}

impl ToolConfiguration {
    /// Start building a configuration facade
    pub fn builder() -> ConfigOptions {
        ConfigOptions::new()
    }

    /// Construction protocol: load, verify requirements, merge placeholders
    /// for the unsatisfied ones, persist if allowed, then either fail with
    /// the missing list or return a ready facade with fresh empty caches.
    pub(crate) fn with_store(
        store: Box<dyn DocumentStore>,
        options: &ConfigOptions,
    ) -> Result<Self, ToolsConfigError> {
        let mut document = store.load();

        let mut missing = Vec::new();
        collect_missing::<ServerCredential>(
            &document.servers,
            &options.required_servers,
            &mut missing,
        );
        collect_missing::<AzureSubscriptionCredential>(
            &document.azure_subscriptions,
            &options.required_subscriptions,
            &mut missing,
        );
        collect_missing::<GenericCredential>(
            &document.generics,
            &options.required_generics,
            &mut missing,
        );

        if !missing.is_empty() {
            warn!("Missing required credentials: [{}]", missing.join(", "));
            let dirty = document.merge(&options.required_document());
            if dirty && options.update_config {
                store.save(&document)?;
            }
            return Err(ToolsConfigError::MissingCredentials(missing));
        }

        Ok(ToolConfiguration {
            document,
            store,
            servers: HashMap::new(),
            subscriptions: HashMap::new(),
            generics: HashMap::new(),
        })
    }

    /// Get the credentials for the given server URL
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no entry matches the URL.
    pub fn get_server_credentials(
        &mut self,
        url: &str,
    ) -> Result<ServerCredential, ToolsConfigError> {
        get_credential(&mut self.servers, &self.document.servers, url)
    }

    /// Get the credentials for the given subscription name or id.
    ///
    /// An empty identifier resolves to the document's default subscription
    /// when one is set.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no entry matches the effective
    /// identifier.
    pub fn get_azure_subscription_credentials(
        &mut self,
        name_or_id: &str,
    ) -> Result<AzureSubscriptionCredential, ToolsConfigError> {
        let effective = if name_or_id.is_empty()
            && !self.document.default_azure_subscription.is_empty()
        {
            self.document.default_azure_subscription.clone()
        } else {
            name_or_id.to_string()
        };
        get_credential(
            &mut self.subscriptions,
            &self.document.azure_subscriptions,
            &effective,
        )
    }

    /// Get the generic credential for the given key
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no entry matches the key.
    pub fn get_generic_credentials(
        &mut self,
        key: &str,
    ) -> Result<GenericCredential, ToolsConfigError> {
        get_credential(&mut self.generics, &self.document.generics, key)
    }

    /// Bare value of a generic key, or the empty string when the key cannot
    /// be resolved. Callers cannot distinguish "not found" from an empty
    /// value through this entry point.
    pub fn get_generic(&mut self, key: &str) -> String {
        self.get_generic_credentials(key)
            .map(|credential| credential.value)
            .unwrap_or_default()
    }

    /// Store the server credentials, replacing the entry with the same URL
    /// or appending a new one. Always writes through.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty URL, or a store error when
    /// the write fails.
    pub fn set_server_credentials(
        &mut self,
        entry: ServerCredential,
    ) -> Result<(), ToolsConfigError> {
        if entry.url.is_empty() {
            return Err(ToolsConfigError::validation("server url missing"));
        }
        upsert(&mut self.document.servers, entry);
        self.store.save(&self.document)
    }

    /// Store the subscription credentials, replacing the entry matching the
    /// name or appending a new one. Always writes through.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, or a store error when
    /// the write fails.
    pub fn set_azure_subscription_credentials(
        &mut self,
        entry: AzureSubscriptionCredential,
    ) -> Result<(), ToolsConfigError> {
        if entry.name.is_empty() {
            return Err(ToolsConfigError::validation(
                "subscription name missing",
            ));
        }
        upsert(&mut self.document.azure_subscriptions, entry);
        self.store.save(&self.document)
    }

    /// Store the generic credential, replacing the entry with the same key
    /// or appending a new one. Always writes through.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty key, or a store error when
    /// the write fails.
    pub fn set_generic_credential(
        &mut self,
        entry: GenericCredential,
    ) -> Result<(), ToolsConfigError> {
        if entry.key.is_empty() {
            return Err(ToolsConfigError::validation(
                "generic credential key missing",
            ));
        }
        upsert(&mut self.document.generics, entry);
        self.store.save(&self.document)
    }

    /// Make the given subscription the target of empty-identifier lookups
    ///
    /// # Errors
    ///
    /// Returns [`ToolsConfigError::UnknownSubscription`] when no
    /// subscription matches the name or id.
    pub fn set_default_subscription(
        &mut self,
        name_or_id: &str,
    ) -> Result<(), ToolsConfigError> {
        if self.document.azure_subscription(name_or_id).is_none() {
            return Err(ToolsConfigError::UnknownSubscription(
                name_or_id.to_string(),
            ));
        }
        self.document.default_azure_subscription = name_or_id.to_string();
        self.store.save(&self.document)
    }

    /// Save a favourite argument list under `(tool, name)`, overwriting any
    /// previous favourite with that name
    pub fn save_favourite(
        &mut self,
        tool: &str,
        name: &str,
        args: Vec<String>,
    ) -> Result<(), ToolsConfigError> {
        self.document
            .favourites
            .entry(tool.to_string())
            .or_default()
            .insert(
                name.to_string(),
                Favourite {
                    name: name.to_string(),
                    args,
                },
            );
        self.store.save(&self.document)
    }

    /// Get a single favourite
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the tool or the name is unknown.
    pub fn get_favourite(
        &self,
        tool: &str,
        name: &str,
    ) -> Result<Favourite, ToolsConfigError> {
        self.document
            .favourites
            .get(tool)
            .and_then(|favourites| favourites.get(name))
            .cloned()
            .ok_or_else(|| {
                ToolsConfigError::not_found(format!(
                    "favourite '{name}' for tool '{tool}'"
                ))
            })
    }

    /// All favourites of a tool, in no particular order. Unknown tools yield
    /// an empty list, not an error.
    pub fn get_favourites(&self, tool: &str) -> Vec<Favourite> {
        self.document
            .favourites
            .get(tool)
            .map(|favourites| favourites.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove a favourite. Removing a name that is already absent is a
    /// no-op as long as the tool has a favourites map.
    ///
    /// # Errors
    ///
    /// Returns an error when no favourites were ever saved, or none exist
    /// for the tool.
    pub fn remove_favourite(
        &mut self,
        tool: &str,
        name: &str,
    ) -> Result<(), ToolsConfigError> {
        if self.document.favourites.is_empty() {
            return Err(ToolsConfigError::NoSavedFavourites);
        }
        let favourites = self
            .document
            .favourites
            .get_mut(tool)
            .ok_or_else(|| {
                ToolsConfigError::NoFavouritesForTool(tool.to_string())
            })?;
        favourites.remove(name);
        self.store.save(&self.document)
    }
}

/// One requirement check per identifier: the environment, then the document,
/// with the kind's validity predicate applied to whatever was found.
fn collect_missing<C: CredentialKind>(
    entries: &[C],
    required: &[String],
    missing: &mut Vec<String>,
) {
    for identifier in required {
        let satisfied = C::from_env(identifier).is_some()
            || lookup(entries, identifier)
                .map(|entry| entry.is_valid())
                .unwrap_or(false);
        if !satisfied {
            missing.push(format!("{}: {identifier}", C::KIND));
        }
    }
}

/// The get protocol shared by the three kinds: environment wins and is never
/// cached; document hits populate the cache; negatives are not cached.
fn get_credential<C: CredentialKind>(
    cache: &mut HashMap<String, C>,
    entries: &[C],
    identifier: &str,
) -> Result<C, ToolsConfigError> {
    if let Some(credential) = C::from_env(identifier) {
        debug!(
            "Using environment override for {}",
            C::describe(identifier)
        );
        return Ok(credential);
    }
    if let Some(credential) = cache.get(identifier) {
        return Ok(credential.clone());
    }
    let credential = lookup(entries, identifier)
        .cloned()
        .ok_or_else(|| ToolsConfigError::not_found(C::describe(identifier)))?;
    cache.insert(identifier.to_string(), credential.clone());
    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::environment_key;
    use crate::location::ConfigLocation;
    use crate::store::FileStore;
    use crate::testing::MemoryStore;
    use std::env;

    fn valid_server(url: &str) -> ServerCredential {
        ServerCredential {
            url: url.to_string(),
            username: "testusername".to_string(),
            password: "testpassword".to_string(),
        }
    }

    fn valid_subscription(name: &str) -> AzureSubscriptionCredential {
        AzureSubscriptionCredential {
            name: name.to_string(),
            subscription_id: "subscription-id".to_string(),
            tenant_id: "tenant-id".to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
        }
    }

    fn populated_document() -> ConfigDocument {
        ConfigDocument {
            servers: vec![valid_server("testserver.io")],
            azure_subscriptions: vec![valid_subscription("testSubscription01")],
            generics: vec![GenericCredential {
                key: "generic".to_string(),
                value: "genericValue".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_values() {
        let store = MemoryStore::new();
        let result = ToolConfiguration::builder()
            .store(store.clone())
            .required_server("testserver.io")
            .required_server("ser.test02.com")
            .required_subscription("testSubscription01")
            .required_generic("generic")
            .build();

        let err = result.err().expect("construction must fail");
        assert_eq!(
            err.missing(),
            [
                "Server: testserver.io",
                "Server: ser.test02.com",
                "AzureSubscriptionCredential: testSubscription01",
                "GenericCredential: generic",
            ]
        );

        // placeholders were provisioned and persisted
        assert_eq!(store.save_count(), 1);
        let saved = store.document();
        assert_eq!(saved.servers.len(), 2);
        assert_eq!(saved.azure_subscriptions.len(), 1);
        assert_eq!(saved.generics.len(), 1);
        assert!(saved.servers.iter().all(|s| !s.is_valid()));
    }

    #[test]
    fn test_existing_values() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .required_subscription("testSubscription01")
            .required_server("testserver.io")
            .required_generic("generic")
            .build()
            .expect("construction must succeed");

        let server = configuration
            .get_server_credentials("testserver.io")
            .expect("server expected");
        assert_eq!(server.username, "testusername");
        assert_eq!(server.password, "testpassword");

        let subscription = configuration
            .get_azure_subscription_credentials("testSubscription01")
            .expect("subscription expected");
        assert_eq!(subscription.subscription_id, "subscription-id");
        assert_eq!(subscription.tenant_id, "tenant-id");
        assert_eq!(subscription.client_id, "client-id");
        assert_eq!(subscription.client_secret, "client-secret");

        // the subscription id is a lookup key too
        let by_id = configuration
            .get_azure_subscription_credentials("subscription-id")
            .expect("subscription expected");
        assert_eq!(by_id.name, "testSubscription01");

        assert_eq!(configuration.get_generic("generic"), "genericValue");

        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_additional_required_value() {
        let store = MemoryStore::with_document(ConfigDocument {
            servers: vec![valid_server("testserver.io")],
            azure_subscriptions: vec![valid_subscription("testSubscription01")],
            ..Default::default()
        });
        let err = ToolConfiguration::builder()
            .store(store.clone())
            .required_subscription("testSubscription01")
            .required_server("testserver.io")
            .required_server("new-server")
            .required_generic("generic")
            .build()
            .err()
            .expect("construction must fail");

        assert_eq!(
            err.missing(),
            ["Server: new-server", "GenericCredential: generic"]
        );

        let saved = store.document();
        assert_eq!(saved.servers.len(), 2);
        assert_eq!(saved.azure_subscriptions.len(), 1);
        assert_eq!(saved.generics.len(), 1);
        // present values survive the merge untouched
        assert_eq!(saved.servers[0].username, "testusername");
    }

    #[test]
    fn test_update_config_disabled_skips_persist() {
        let store = MemoryStore::new();
        let err = ToolConfiguration::builder()
            .store(store.clone())
            .update_config(false)
            .required_server("srv1")
            .build()
            .err()
            .expect("construction must fail");

        assert_eq!(err.missing(), ["Server: srv1"]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_environment_only_construction() {
        let url = "cfg.env-only.io";
        env::set_var(environment_key(url, &["username"]), "envUsername");
        env::set_var(environment_key(url, &["password"]), "envPassword");

        let store = MemoryStore::new();
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .required_server(url)
            .build()
            .expect("environment satisfies the requirement");

        let server = configuration
            .get_server_credentials(url)
            .expect("server expected");
        assert_eq!(server.url, url);
        assert_eq!(server.username, "envUsername");
        assert_eq!(server.password, "envPassword");
        assert_eq!(store.save_count(), 0);

        env::remove_var(environment_key(url, &["username"]));
        env::remove_var(environment_key(url, &["password"]));
    }

    #[test]
    fn test_environment_precedence_not_cached() {
        let url = "cfg.precedence.io";
        let store = MemoryStore::with_document(ConfigDocument {
            servers: vec![valid_server(url)],
            ..Default::default()
        });
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .required_server(url)
            .build()
            .expect("construction must succeed");

        env::set_var(environment_key(url, &["username"]), "envUsername");
        env::set_var(environment_key(url, &["password"]), "envPassword");
        let server = configuration
            .get_server_credentials(url)
            .expect("server expected");
        assert_eq!(server.username, "envUsername");

        env::remove_var(environment_key(url, &["username"]));
        env::remove_var(environment_key(url, &["password"]));

        // the override was not cached and never reached the document
        let server = configuration
            .get_server_credentials(url)
            .expect("server expected");
        assert_eq!(server.username, "testusername");
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.document().servers[0].username, "testusername");
    }

    #[test]
    fn test_default_subscription_resolution() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        // no default set yet
        assert!(configuration
            .get_azure_subscription_credentials("")
            .err()
            .expect("lookup must fail")
            .is_not_found());

        configuration
            .set_default_subscription("testSubscription01")
            .expect("subscription exists");
        assert_eq!(
            store.document().default_azure_subscription,
            "testSubscription01"
        );

        let by_default = configuration
            .get_azure_subscription_credentials("")
            .expect("default resolves");
        let by_name = configuration
            .get_azure_subscription_credentials("testSubscription01")
            .expect("name resolves");
        assert_eq!(by_default, by_name);
    }

    #[test]
    fn test_set_unknown_default_subscription() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        let err = configuration
            .set_default_subscription("lalala")
            .err()
            .expect("unknown subscription must fail");
        assert!(matches!(err, ToolsConfigError::UnknownSubscription(_)));
        assert!(store.document().default_azure_subscription.is_empty());
    }

    #[test]
    fn test_set_replaces_all_fields() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        configuration
            .set_server_credentials(ServerCredential {
                url: "testserver.io".to_string(),
                username: String::new(),
                password: String::new(),
            })
            .expect("set must succeed");

        let saved = store.document();
        assert_eq!(saved.servers.len(), 1);
        assert!(saved.servers[0].username.is_empty());
        assert!(saved.servers[0].password.is_empty());
    }

    #[test]
    fn test_set_appends_unknown_entries() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        configuration
            .set_server_credentials(valid_server("second.server.io"))
            .expect("set must succeed");
        configuration
            .set_azure_subscription_credentials(valid_subscription(
                "secondSubscription",
            ))
            .expect("set must succeed");
        configuration
            .set_generic_credential(GenericCredential {
                key: "token".to_string(),
                value: "secret".to_string(),
            })
            .expect("set must succeed");

        let saved = store.document();
        assert_eq!(saved.servers.len(), 2);
        assert_eq!(saved.azure_subscriptions.len(), 2);
        assert_eq!(saved.generics.len(), 2);
        assert_eq!(store.save_count(), 3);
    }

    #[test]
    fn test_set_with_empty_key_is_validation_error() {
        let store = MemoryStore::new();
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        assert!(matches!(
            configuration.set_server_credentials(ServerCredential::default()),
            Err(ToolsConfigError::Validation(_))
        ));
        assert!(matches!(
            configuration.set_azure_subscription_credentials(
                AzureSubscriptionCredential::default()
            ),
            Err(ToolsConfigError::Validation(_))
        ));
        assert!(matches!(
            configuration
                .set_generic_credential(GenericCredential::default()),
            Err(ToolsConfigError::Validation(_))
        ));
        // no I/O happened
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_fresh_caches_after_construction() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store)
            .required_server("testserver.io")
            .build()
            .expect("construction must succeed");

        // construction-time verification must not have primed the cache, so
        // the set below is visible to the first get
        configuration
            .set_server_credentials(ServerCredential {
                url: "testserver.io".to_string(),
                username: "changed".to_string(),
                password: "changed".to_string(),
            })
            .expect("set must succeed");

        let server = configuration
            .get_server_credentials("testserver.io")
            .expect("server expected");
        assert_eq!(server.username, "changed");
    }

    // The lookup caches are never invalidated: a get that already cached a
    // key keeps returning the pre-set record. Known staleness gap, kept on
    // purpose.
    #[test]
    fn test_cached_get_survives_set() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        let before = configuration
            .get_server_credentials("testserver.io")
            .expect("server expected");
        assert_eq!(before.username, "testusername");

        configuration
            .set_server_credentials(ServerCredential {
                url: "testserver.io".to_string(),
                username: "changed".to_string(),
                password: "changed".to_string(),
            })
            .expect("set must succeed");
        assert_eq!(store.document().servers[0].username, "changed");

        let after = configuration
            .get_server_credentials("testserver.io")
            .expect("server expected");
        assert_eq!(after.username, "testusername");
    }

    #[test]
    fn test_get_generic_lossy_wrapper() {
        let store = MemoryStore::with_document(populated_document());
        let mut configuration = ToolConfiguration::builder()
            .store(store)
            .build()
            .expect("construction must succeed");

        assert_eq!(configuration.get_generic("generic"), "genericValue");
        assert_eq!(configuration.get_generic("unknown"), "");
    }

    #[test]
    fn test_favourites() {
        let store = MemoryStore::new();
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        assert!(configuration.get_favourites("testtool").is_empty());

        let args: Vec<String> = ["arg1", "arg2", "arg3", "arg4"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();
        configuration
            .save_favourite("testtool", "testFav1", args.clone())
            .expect("save must succeed");

        let saved = store.document();
        assert!(saved.servers.is_empty());
        assert!(saved.azure_subscriptions.is_empty());
        assert!(saved.generics.is_empty());
        assert_eq!(saved.favourites.len(), 1);
        assert_eq!(
            saved.favourites["testtool"]["testFav1"].args,
            args
        );

        let favourite = configuration
            .get_favourite("testtool", "testFav1")
            .expect("favourite expected");
        assert_eq!(favourite.name, "testFav1");
        assert_eq!(favourite.args, args);

        configuration
            .save_favourite(
                "testtool",
                "testFav2",
                vec!["x1".to_string(), "x2".to_string()],
            )
            .expect("save must succeed");
        assert_eq!(configuration.get_favourites("testtool").len(), 2);
        assert!(configuration.get_favourites("othertool").is_empty());
    }

    #[test]
    fn test_get_unknown_favourite() {
        let store = MemoryStore::new();
        let configuration = ToolConfiguration::builder()
            .store(store)
            .build()
            .expect("construction must succeed");

        let err = configuration
            .get_favourite("testtool", "nothere")
            .err()
            .expect("lookup must fail");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_favourite() {
        let store = MemoryStore::new();
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        // nothing saved at all
        assert!(matches!(
            configuration.remove_favourite("testtool", "fav"),
            Err(ToolsConfigError::NoSavedFavourites)
        ));

        configuration
            .save_favourite("testtool", "fav", vec!["a".to_string()])
            .expect("save must succeed");

        // favourites exist, but not for this tool
        assert!(matches!(
            configuration.remove_favourite("othertool", "fav"),
            Err(ToolsConfigError::NoFavouritesForTool(_))
        ));

        // removing an absent name under a known tool is a silent no-op
        configuration
            .remove_favourite("testtool", "nothere")
            .expect("no-op remove must succeed");

        configuration
            .remove_favourite("testtool", "fav")
            .expect("remove must succeed");
        assert!(configuration.get_favourite("testtool", "fav").is_err());
        assert!(store.document().favourites["testtool"].is_empty());
    }

    #[test]
    fn test_save_error_propagates() {
        let store = MemoryStore::new();
        let mut configuration = ToolConfiguration::builder()
            .store(store.clone())
            .build()
            .expect("construction must succeed");

        store.fail_saves(true);
        let err = configuration
            .set_server_credentials(valid_server("srv"))
            .err()
            .expect("set must fail");
        assert!(matches!(err, ToolsConfigError::Io(_)));
    }

    #[test]
    fn test_end_to_end_placeholder_scenario() {
        let store = MemoryStore::new();
        let err = ToolConfiguration::builder()
            .store(store.clone())
            .required_server("srv1")
            .required_generic("g1")
            .build()
            .err()
            .expect("construction must fail");

        assert_eq!(
            err.missing(),
            ["Server: srv1", "GenericCredential: g1"]
        );

        let saved = store.document();
        assert_eq!(saved.servers.len(), 1);
        assert_eq!(saved.servers[0].url, "srv1");
        assert!(saved.servers[0].username.is_empty());
        assert!(saved.servers[0].password.is_empty());
        assert_eq!(saved.generics.len(), 1);
        assert_eq!(saved.generics[0].key, "g1");
        assert!(saved.generics[0].value.is_empty());
    }

    #[test]
    fn test_file_backed_provision_then_fill() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let location = ConfigLocation::new(
            dir.path().to_str().expect("utf-8 path"),
            "config.yaml",
        );

        // first run provisions the placeholder file and fails
        let err = ToolConfiguration::builder()
            .location(location.clone())
            .required_server("srv1")
            .build()
            .err()
            .expect("first run must fail");
        assert_eq!(err.missing(), ["Server: srv1"]);

        // fill in the placeholder the way an operator would
        let path = location.file_path().expect("path expected");
        let file_store = FileStore::new(&path);
        let mut document = file_store.load();
        assert_eq!(document.servers.len(), 1);
        document.servers[0].username = "user".to_string();
        document.servers[0].password = "pass".to_string();
        file_store.save(&document).expect("save must succeed");

        // second run succeeds against the completed file
        let mut configuration = ToolConfiguration::builder()
            .location(location)
            .required_server("srv1")
            .build()
            .expect("second run must succeed");
        let server = configuration
            .get_server_credentials("srv1")
            .expect("server expected");
        assert_eq!(server.username, "user");
    }
}
