//! Persisted configuration document and the merge engine
//!
//! The document is the single aggregate persisted to disk. Within each
//! credential sequence at most one entry matches a given key; lookups return
//! the first match.

use crate::credential::{
    AzureSubscriptionCredential, CredentialKind, Favourite, GenericCredential,
    ServerCredential,
};
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;

/// The whole configuration document, serialized as one YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Name or id of the subscription an empty-identifier lookup resolves to
    #[serde(
        default,
        rename = "defaultAzureSubscription",
        skip_serializing_if = "String::is_empty"
    )]
    pub default_azure_subscription: String,
    #[serde(default)]
    pub servers: Vec<ServerCredential>,
    #[serde(default, rename = "azureSubscriptions")]
    pub azure_subscriptions: Vec<AzureSubscriptionCredential>,
    #[serde(default)]
    pub generics: Vec<GenericCredential>,
    /// Favourites per tool name, then per favourite name
    #[serde(default)]
    pub favourites: HashMap<String, HashMap<String, Favourite>>,
}

impl ConfigDocument {
    pub(crate) fn server(&self, url: &str) -> Option<&ServerCredential> {
        lookup(&self.servers, url)
    }

    pub(crate) fn azure_subscription(
        &self,
        name_or_id: &str,
    ) -> Option<&AzureSubscriptionCredential> {
        lookup(&self.azure_subscriptions, name_or_id)
    }

    pub(crate) fn generic(&self, key: &str) -> Option<&GenericCredential> {
        lookup(&self.generics, key)
    }

    /// Append a placeholder for every entry of `required` whose key is absent
    /// from this document.
    ///
    /// Additive only: existing entries are never edited or removed, so any
    /// credential values already present survive. Matching is by key
    /// presence, not value equality, which makes the operation idempotent.
    ///
    /// Returns whether anything was appended.
    pub fn merge(&mut self, required: &ConfigDocument) -> bool {
        let mut dirty = merge_entries(&mut self.servers, &required.servers);
        dirty |= merge_entries(
            &mut self.azure_subscriptions,
            &required.azure_subscriptions,
        );
        dirty |= merge_entries(&mut self.generics, &required.generics);
        dirty
    }
}

/// First entry matching the identifier, if any
pub(crate) fn lookup<'a, C: CredentialKind>(
    entries: &'a [C],
    identifier: &str,
) -> Option<&'a C> {
    entries.iter().find(|entry| entry.matches(identifier))
}

/// Replace the entry matching the incoming key, or append.
///
/// A replace overwrites every field of the existing entry, blanks included.
pub(crate) fn upsert<C: CredentialKind>(entries: &mut Vec<C>, entry: C) {
    let key = entry.key().to_string();
    match entries.iter_mut().find(|existing| existing.matches(&key)) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
}

fn merge_entries<C: CredentialKind>(
    existing: &mut Vec<C>,
    required: &[C],
) -> bool {
    let mut dirty = false;
    for entry in required {
        if lookup(existing, entry.key()).is_none() {
            debug!(
                "Appending placeholder entry {}",
                C::describe(entry.key())
            );
            existing.push(entry.clone());
            dirty = true;
        }
    }
    dirty
}
