// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Credential model
//!
//! Three credential kinds share one shape: a lookup key, a validity
//! predicate, and an environment-override lookup. The [`CredentialKind`]
//! trait captures that shape so the merge, get, and set algorithms are
//! written once instead of per kind.
//!
//! Presence and validity are distinct: an entry can exist in the document as
//! a placeholder carrying only its key, and such an entry never satisfies a
//! requirement.

use crate::env::env_value;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Common shape of the three credential kinds
pub trait CredentialKind: Clone {
    /// Kind label used in missing-requirement reports, e.g. `Server: <url>`
    const KIND: &'static str;

    /// The logical lookup key of this entry
    fn key(&self) -> &str;

    /// Whether this entry is found by the given identifier
    fn matches(&self, identifier: &str) -> bool;

    /// Whether the entry carries a complete set of credential values
    fn is_valid(&self) -> bool;

    /// Build the entry from environment variables.
    ///
    /// Returns `Some` only if the candidate satisfies [`is_valid`]; `None`
    /// means no override is present, which is a normal negative result.
    ///
    /// [`is_valid`]: CredentialKind::is_valid
    fn from_env(identifier: &str) -> Option<Self>;

    /// An entry carrying only the lookup key, inserted by the merge engine
    /// for a required-but-absent credential
    fn placeholder(identifier: &str) -> Self;

    /// Description used in not-found errors, e.g. `server 'my.server.com'`
    fn describe(identifier: &str) -> String;
}

/// Credentials for a server, keyed by URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCredential {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialKind for ServerCredential {
    const KIND: &'static str = "Server";

    fn key(&self) -> &str {
        &self.url
    }

    fn matches(&self, identifier: &str) -> bool {
        self.url == identifier
    }

    fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    fn from_env(identifier: &str) -> Option<Self> {
        let candidate = ServerCredential {
            url: identifier.to_string(),
            username: env_value(identifier, "username"),
            password: env_value(identifier, "password"),
        };
        candidate.is_valid().then_some(candidate)
    }

    fn placeholder(identifier: &str) -> Self {
        ServerCredential {
            url: identifier.to_string(),
            ..Default::default()
        }
    }

    fn describe(identifier: &str) -> String {
        format!("server '{identifier}'")
    }
}

/// Credentials for an Azure subscription, found by either name or
/// subscription id.
///
/// The name alone does not make an entry valid; a placeholder can exist with
/// only a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureSubscriptionCredential {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "subscriptionID")]
    pub subscription_id: String,
    #[serde(default, rename = "tenantID")]
    pub tenant_id: String,
    #[serde(default, rename = "clientID")]
    pub client_id: String,
    #[serde(default, rename = "clientSecret")]
    pub client_secret: String,
}

impl CredentialKind for AzureSubscriptionCredential {
    const KIND: &'static str = "AzureSubscriptionCredential";

    fn key(&self) -> &str {
        &self.name
    }

    fn matches(&self, identifier: &str) -> bool {
        self.name == identifier || self.subscription_id == identifier
    }

    fn is_valid(&self) -> bool {
        !self.subscription_id.is_empty()
            && !self.tenant_id.is_empty()
            && !self.client_id.is_empty()
            && !self.client_secret.is_empty()
    }

    fn from_env(identifier: &str) -> Option<Self> {
        let candidate = AzureSubscriptionCredential {
            name: identifier.to_string(),
            subscription_id: env_value(identifier, "subscriptionId"),
            tenant_id: env_value(identifier, "tenantId"),
            client_id: env_value(identifier, "clientId"),
            client_secret: env_value(identifier, "clientSecret"),
        };
        candidate.is_valid().then_some(candidate)
    }

    fn placeholder(identifier: &str) -> Self {
        // The identifier may be either a name or a subscription id, so the
        // placeholder carries it in both key fields.
        AzureSubscriptionCredential {
            name: identifier.to_string(),
            subscription_id: identifier.to_string(),
            ..Default::default()
        }
    }

    fn describe(identifier: &str) -> String {
        format!("subscription '{identifier}'")
    }
}

/// A generic key/value credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericCredential {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl CredentialKind for GenericCredential {
    const KIND: &'static str = "GenericCredential";

    fn key(&self) -> &str {
        &self.key
    }

    fn matches(&self, identifier: &str) -> bool {
        self.key == identifier
    }

    fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    fn from_env(identifier: &str) -> Option<Self> {
        let candidate = GenericCredential {
            key: identifier.to_string(),
            value: env_value(identifier, "value"),
        };
        candidate.is_valid().then_some(candidate)
    }

    fn placeholder(identifier: &str) -> Self {
        GenericCredential {
            key: identifier.to_string(),
            ..Default::default()
        }
    }

    fn describe(identifier: &str) -> String {
        format!("generic '{identifier}'")
    }
}

/// A named, saved argument list for replaying a prior invocation of a host
/// tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl fmt::Display for Favourite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - '{}'", self.name, self.args.join(" "))
    }
}
