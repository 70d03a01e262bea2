// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Toolsconfig Authors

//! Environment override resolution
//!
//! Operators inject credentials through environment variables whose names are
//! derived from the logical identifier of an entry. The derivation is part of
//! the public contract: a server URL `my.server-1.com` with the suffix
//! `username` resolves to `MY_SERVER_1_COM_USERNAME`.

use std::env;

/// Derive the canonical environment-variable name for an identifier and a
/// list of field suffixes.
///
/// `.` and `-` in the identifier are replaced with `_`, the identifier and
/// the suffixes are joined with `_`, and the whole result is upper-cased.
///
/// # Examples
///
/// ```
/// use toolsconfig::env::environment_key;
///
/// assert_eq!(
///     environment_key("my.server-1.com", &["username"]),
///     "MY_SERVER_1_COM_USERNAME"
/// );
/// ```
pub fn environment_key(identifier: &str, suffixes: &[&str]) -> String {
    let prefix = identifier.replace(['.', '-'], "_");
    let mut parts = vec![prefix.as_str()];
    parts.extend_from_slice(suffixes);
    parts.join("_").to_uppercase()
}

/// Read the override variable for an identifier/suffix pair.
///
/// An unset variable yields the empty string; the validity predicate of the
/// credential kind decides whether the candidate counts as an override.
pub(crate) fn env_value(identifier: &str, suffix: &str) -> String {
    env::var(environment_key(identifier, &[suffix])).unwrap_or_default()
}
