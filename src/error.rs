use thiserror::Error;

/// Errors returned by the configuration facade and the document store.
#[derive(Error, Debug)]
pub enum ToolsConfigError {
    /// A credential or favourite does not exist under the given key
    #[error("{0} not found")]
    NotFound(String),

    /// Required credentials are absent or invalid after the placeholder merge.
    /// Carries one `"<Kind>: <identifier>"` entry per unsatisfied requirement.
    #[error("missing required credentials: [{}]", .0.join(", "))]
    MissingCredentials(Vec<String>),

    /// A Set-family call with an empty key field
    #[error("validation error: {0}")]
    Validation(String),

    /// The store failed to write the document
    #[error("configuration store I/O error")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized
    #[error("configuration document serialization error")]
    Yaml(#[from] serde_yaml::Error),

    /// `set_default_subscription` with a name or id not present in the document
    #[error("subscription '{0}' does not exist")]
    UnknownSubscription(String),

    /// The store location is home-relative but HOME is not set
    #[error("HOME environment variable is not set")]
    MissingHomeDir,

    /// `remove_favourite` on a document with no favourites at all
    #[error("no saved favourites")]
    NoSavedFavourites,

    /// `remove_favourite` for a tool without any favourites
    #[error("no favourites exist for tool '{0}'")]
    NoFavouritesForTool(String),
}

impl ToolsConfigError {
    /// Create a new not-found error for the given description
    /// (e.g. `server 'my.server.com'`).
    pub fn not_found<T: Into<String>>(what: T) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a new validation error
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Check whether this error is a plain not-found condition
    ///
    /// Callers branch on this to distinguish an absent entry from a real
    /// failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The unsatisfied requirements carried by a
    /// [`MissingCredentials`](Self::MissingCredentials) error, empty for any
    /// other variant.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::MissingCredentials(missing) => missing,
            _ => &[],
        }
    }
}
